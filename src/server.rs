//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory registry, wires up the router, and runs the Axum
//! server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::config::Config;
use crate::domain::registry::CodeRegistry;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// The registry lives for the whole process and is never persisted; a
/// restart starts from an empty store and a fresh identifier sequence.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address fails to parse
/// - The server bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(CodeRegistry::new());
    let state = AppState::new(registry, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
