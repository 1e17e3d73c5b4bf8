mod config;
mod routes;

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "polytray stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServerConfig::from_env()?;
    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(dir = %config.static_dir.display(), "static dir has no index.html");
    }

    let addr = config.addr();
    let app = routes::app(&config.static_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, dir = %config.static_dir.display(), "polytray listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
