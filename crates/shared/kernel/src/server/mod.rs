//! # Entry point
//!
//! Every app exposes a single [`Router`]; this module attaches it to one of two adapters:
//! the AWS Lambda event loop, or a plain HTTP listener for Docker and local development.

mod lambda;
mod response;

pub use lambda::strip_stage;
pub use response::{PrettyJson, not_found};

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use slref_domain::config::AppConfig;
use slref_domain::constants::LAMBDA_RUNTIME_API_ENV;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower::ServiceExt;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Returns `true` inside the AWS Lambda execution environment.
#[must_use]
pub fn is_running_on_lambda() -> bool {
    std::env::var_os(LAMBDA_RUNTIME_API_ENV).is_some()
}

/// Runs `app` on Lambda when deployed there, otherwise binds a listener on
/// [`AppConfig::bind_target`].
///
/// The router is constructed once by the caller and reused for every event or connection.
/// On Lambda, the API Gateway stage is stripped from request paths before routing.
///
/// # Errors
/// Returns an error if the Lambda runtime loop fails, the host cannot be resolved or the
/// listener cannot bind.
pub async fn launch(app: Router, cfg: &AppConfig) -> Result<()> {
    if is_running_on_lambda() {
        info!(service = %cfg.service(), "Starting Lambda event loop");
        return lambda_http::run(app.map_request(strip_stage::<lambda_http::Body>))
            .await
            .map_err(|e| anyhow!("Lambda runtime failed: {e}"));
    }

    let address = resolve(cfg.bind_target()).await?;
    serve(app, address).await
}

/// Resolves a host name or IP literal to the first matching socket address.
///
/// # Errors
/// Returns an error if the lookup fails or yields no address.
pub async fn resolve((host, port): (&str, u16)) -> Result<SocketAddr> {
    tokio::net::lookup_host((host, port))
        .await
        .with_context(|| format!("Failed to resolve SERVER_HOST '{host}'"))?
        .next()
        .with_context(|| format!("SERVER_HOST '{host}' resolved to no address"))
}

/// Serves `app` over plain HTTP until Ctrl+C or SIGTERM is received.
///
/// # Errors
/// Returns an error if the server fails to bind to `address`.
pub async fn serve(app: Router, address: SocketAddr) -> Result<()> {
    serve_with_handle(app, address, Handle::new()).await
}

/// Like [`serve`], but driven by a caller-owned [`Handle`] that exposes the bound address
/// and can trigger a graceful shutdown.
///
/// # Errors
/// Returns an error if the server fails to bind to `address`.
pub async fn serve_with_handle(
    app: Router,
    address: SocketAddr,
    handle: Handle<SocketAddr>,
) -> Result<()> {
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!("Error while waiting for shutdown signal: {e}");
            return;
        }
        info!("Shutdown signal received, starting graceful shutdown...");
        shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
    });

    let listening = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = listening.listening().await {
            info!("Server started at http://{bound}");
        }
    });

    axum_server::bind(address)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .with_context(|| format!("HTTP server failed on {address}"))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
