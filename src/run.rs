//! Server lifecycle.
//!
//! Binds the listener, serves the relay router and stops gracefully on
//! Ctrl+C or SIGTERM, letting in-flight requests finish.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use slackpost::config::ValidatedConfig;
use slackpost::relay;
use slackpost::slack::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address from the configuration
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Runs the relay until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails while running.
///
/// # Coverage Note
///
/// Excluded from coverage - requires real signal handling. The serving path
/// itself is covered through [`serve`].
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| RunError::Bind {
            addr: config.listen,
            source,
        })?;

    let app = relay::router(ReqwestClient::new(), config.api_base_url);

    serve(listener, app, shutdown_signal()).await
}

/// Serves `app` on `listener` until `shutdown` completes.
///
/// # Errors
///
/// Returns [`RunError::Serve`] if the server fails.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), RunError>
where
    F: Future<Output = ()> + Send + 'static,
{
    match listener.local_addr() {
        Ok(addr) => tracing::info!("Relay listening on {addr}"),
        Err(e) => tracing::warn!("Relay listening on unknown address: {e}"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(RunError::Serve)?;

    tracing::info!("Relay stopped");
    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C, or SIGTERM on Unix).
///
/// A signal that cannot be installed is logged and never fires; the other
/// one still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining requests...");
}
