//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Access Tracking
///
/// The access counter is bumped only after a successful resolve; a miss
/// leaves the registry untouched and returns 404. Plain stats reads go
/// through [`super::stats_handler`] and never increment.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.registry.resolve(&code).ok_or_else(|| {
        AppError::not_found("Short link not found", json!({ "code": &code }))
    })?;

    if let Some(total) = state.registry.record_and_count(&code) {
        debug!(code = %code, total, "recorded access");
    }

    Ok(Redirect::temporary(&record.long_url))
}
