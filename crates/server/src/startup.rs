use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use service::Directory;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}:{}: {e}", cfg.server.host, cfg.server.port)))
}

/// Build the application for an already opened directory.
pub fn app(directory: Directory) -> Router {
    routes::build_router(AppState::new(directory), build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Open the configured storage backend and serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> Result<(), StartupError> {
    let addr = bind_addr(&cfg)?;
    let stores = service::store::backend::open(&cfg).await?;
    let app = app(Directory::new(stores));

    info!(%addr, backend = ?cfg.storage.backend, "starting directory server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Any(anyhow::anyhow!("bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!(service = "server", event = "stop", "server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn bind_addr_uses_configured_port() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 9090);
    }
}
