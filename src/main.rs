mod config;
mod fixtures;
mod model;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let result = run().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "drawing-review exited");
    }
    result
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let upload_dir = config.upload_dir.clone();

    let store = fixtures::seed();
    tracing::info!(
        projects = store.projects.len(),
        drawings = store.drawings.len(),
        annotations = store.annotations.len(),
        "review store seeded"
    );

    let state = state::AppState::new(store, config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, upload_dir = %upload_dir.display(), "drawing-review listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
