use thiserror::Error;
use uuid::Uuid;

use crate::collection::Collection;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("failed to encode document for `{collection}`: {source}")]
    Encode {
        collection: Collection,
        source: serde_json::Error,
    },

    #[error("failed to decode `{collection}` document {id}: {source}")]
    Decode {
        collection: Collection,
        id: Uuid,
        source: serde_json::Error,
    },

    #[error("`{collection}` documents must be JSON objects")]
    NotAnObject { collection: Collection },
}
