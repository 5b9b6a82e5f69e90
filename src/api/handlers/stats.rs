//! Handler for link access statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves access statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Read-only: a stats query never counts as an access.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state
        .registry
        .resolve(&code)
        .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": &code })))?;

    let total = state
        .registry
        .count(&code)
        .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": &code })))?;

    Ok(Json(StatsResponse {
        code,
        long_url: record.long_url,
        created_at: record.created_at,
        total,
    }))
}
