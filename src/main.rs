use anyhow::Context;
use bookvibe::logging::{init_tracing, shutdown_tracer};
use bookvibe::metrics::{init_metrics, metrics_app};
use bookvibe::router::init_router;
use bookvibe::state::init_app_state;
use bookvibe_config::ServerConfig;
use dotenvy::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let prometheus = init_metrics().context("Failed to install Prometheus recorder")?;

    let state = init_app_state().await?;
    let mut app = init_router(state);
    if let Some(handle) = prometheus {
        app = app.merge(metrics_app(handle));
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(%address, "Book Vibe server listening");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
