use std::sync::Arc;

use crate::domain::registry::CodeRegistry;

/// Shared application state injected into all handlers.
///
/// The registry is the single shared resource; it is internally thread-safe,
/// so the state is a cheap `Clone` with no locking of its own.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CodeRegistry>,
    pub base_url: String,
}

impl AppState {
    pub fn new(registry: Arc<CodeRegistry>, base_url: String) -> Self {
        Self { registry, base_url }
    }

    /// Full public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
