#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use snaplink::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use snaplink::domain::registry::CodeRegistry;
use snaplink::state::AppState;

pub const TEST_BASE_URL: &str = "http://short.test";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(CodeRegistry::new()), TEST_BASE_URL.to_string())
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}
