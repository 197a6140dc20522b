//! Server startup and shutdown logic.
//!
//! `run_server` builds the router from configuration, binds the listener
//! and serves until a shutdown signal arrives.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::openapi::{APP_TITLE, APP_VERSION};
use crate::routes;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `addr` - The address to bind the server to (e.g., "127.0.0.1:8000")
///
/// # Errors
///
/// Returns `AppError::Internal` if the address cannot be bound or the
/// server fails while running.
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting {} v{}...", APP_TITLE, APP_VERSION);

    let app = routes::create_router(&config.cors);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!(
        allowed_origins = ?config.cors.allowed_origins,
        allow_credentials = config.cors.allow_credentials,
        "CORS policy configured"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM as well on Unix.
///
/// # Panics
///
/// Panics if a signal handler cannot be installed; graceful shutdown is
/// impossible without one.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
