//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// The registry is in-process memory with no external dependencies, so the
/// check reports its size rather than connectivity.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let links = state.registry.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{links} links stored")),
            },
        },
    })
}
