//! Server entry point.

use anyhow::Context;
use backend::{
    config::BackendConfig,
    dataset_utils::dataset_store::DatasetStore,
    server_extra::{AppState, app_router},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BackendConfig::from_env();
    info!("Loading datasets from {}", config.dataset_dir.display());
    let store = DatasetStore::load(&config.dataset_dir)?;

    let app = app_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await.context("Server exited with an error")?;
    Ok(())
}
