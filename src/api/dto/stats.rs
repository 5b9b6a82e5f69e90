//! DTOs for the link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Access statistics for a specific short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    /// Total number of redirects served for this code.
    pub total: u64,
}
