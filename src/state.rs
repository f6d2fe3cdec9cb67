use anyhow::Context;
use bookvibe_config::{CorsConfig, DatabaseConfig, JwtConfig};
use bookvibe_db::DocumentStore;
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: DocumentStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

/// Opens the document store, applies migrations and reads the rest of the
/// configuration from the environment.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env();

    let store = DocumentStore::connect(&database_config)
        .await
        .context("Failed to connect to the document store")?;
    store
        .ping()
        .await
        .context("Document store did not answer the startup ping")?;
    store
        .migrate()
        .await
        .context("Failed to run database migrations")?;

    info!(
        host = %database_config.host,
        database = %database_config.name,
        "Connected to the document store"
    );

    Ok(AppState {
        store,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
