//! # Book Vibe DB
//!
//! The document store connector.
//!
//! Documents are JSON objects kept in PostgreSQL, one JSONB table per
//! [`Collection`]. The [`DocumentStore`] handle is opened once at startup,
//! cloned into request state, and offers the single-statement operations the
//! routes need: list, filter by field, insert, set fields, delete.
//!
//! # Example
//!
//! ```ignore
//! use bookvibe_config::DatabaseConfig;
//! use bookvibe_db::{Collection, DocumentStore};
//! use bookvibe_models::Book;
//!
//! let store = DocumentStore::connect(&DatabaseConfig::from_env()).await?;
//! store.migrate().await?;
//!
//! let books: Vec<Book> = store.find_all(Collection::Books).await?;
//! ```

pub mod collection;
pub mod error;
pub mod store;

pub use collection::Collection;
pub use error::StoreError;
pub use store::{DocumentStore, ID_FIELD, MIGRATOR};

pub use sqlx::PgPool;
