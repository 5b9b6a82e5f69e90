mod common;

use serde_json::Value;

#[tokio::test]
async fn test_stats_zero_before_any_access() {
    let state = common::create_test_state();
    let server = common::test_server(state.clone());

    let code = state.registry.create("https://example.com".to_string());

    let response = server.get(&format!("/api/stats/{code}")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], code);
    assert_eq!(body["long_url"], "https://example.com");
    assert_eq!(body["total"], 0);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_stats_counts_redirects() {
    let state = common::create_test_state();
    let server = common::test_server(state.clone());

    let code = state.registry.create("https://example.com".to_string());

    for _ in 0..5 {
        server.get(&format!("/{code}")).await;
    }

    let body: Value = server.get(&format!("/api/stats/{code}")).await.json();
    assert_eq!(body["total"], 5);
}

#[tokio::test]
async fn test_stats_query_is_read_only() {
    let state = common::create_test_state();
    let server = common::test_server(state.clone());

    let code = state.registry.create("https://example.com".to_string());
    server.get(&format!("/{code}")).await;

    // Repeated stats reads must not move the counter.
    for _ in 0..3 {
        let body: Value = server.get(&format!("/api/stats/{code}")).await.json();
        assert_eq!(body["total"], 1);
    }
}

#[tokio::test]
async fn test_stats_not_found() {
    let state = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/api/stats/doesNotExist").await;

    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["code"], "doesNotExist");
}

#[tokio::test]
async fn test_stats_tracks_codes_independently() {
    let state = common::create_test_state();
    let server = common::test_server(state.clone());

    let busy = state.registry.create("http://a".to_string());
    let idle = state.registry.create("http://b".to_string());

    server.get(&format!("/{busy}")).await;
    server.get(&format!("/{busy}")).await;

    let busy_stats: Value = server.get(&format!("/api/stats/{busy}")).await.json();
    let idle_stats: Value = server.get(&format!("/api/stats/{idle}")).await.json();

    assert_eq!(busy_stats["total"], 2);
    assert_eq!(idle_stats["total"], 0);
}
