//! # filedepot-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the filedepot file store.
//! Binds to a configurable port (default 8080).

use filedepot_api::{app, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment (PORT, STORAGE_DIR, MAX_UPLOAD_BYTES).
    let config = AppConfig::from_env();
    let port = config.port;

    // Open the backing store, creating the directory if absent.
    let state = AppState::try_new(config).await.map_err(|e| {
        tracing::error!("Failed to open backing store: {e}");
        e
    })?;
    tracing::info!(
        storage_dir = %state.config.storage_dir.display(),
        max_upload_bytes = state.config.max_upload_bytes,
        "Backing store ready"
    );

    let app = app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("filedepot API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
