//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Behavior
///
/// Always succeeds for well-formed JSON: the registry accepts any string,
/// and code collisions are impossible by construction (monotonic identifier
/// plus injective encoding), so there is no conflict case to report.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Json<ShortenResponse> {
    let code = state.registry.create(payload.url.clone());
    let short_url = state.short_url(&code);

    debug!(code = %code, "created short link");

    Json(ShortenResponse {
        code,
        short_url,
        long_url: payload.url,
    })
}
