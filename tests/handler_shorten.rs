mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use linksnip::api::handlers::shorten_handler;
use serde_json::json;
use sqlx::PgPool;

fn shorten_app(pool: PgPool) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let server = TestServer::new(shorten_app(pool.clone())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    // First 6 hex chars of sha256("https://example.com")
    assert_eq!(
        body["shortUrl"],
        format!("{}/100680", common::TEST_BASE_URL)
    );

    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_is_idempotent(pool: PgPool) {
    let server = TestServer::new(shorten_app(pool.clone())).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://dedup.example.com/page" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://dedup.example.com/page" }))
        .await;
    second.assert_status_ok();

    let url1 = first.json::<serde_json::Value>()["shortUrl"].clone();
    let url2 = second.json::<serde_json::Value>()["shortUrl"].clone();
    assert_eq!(url1, url2);

    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_distinct_urls_get_distinct_ids(pool: PgPool) {
    let server = TestServer::new(shorten_app(pool.clone())).unwrap();

    let a = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com/a" }))
        .await;
    let b = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com/b" }))
        .await;

    a.assert_status_ok();
    b.assert_status_ok();

    let url_a = a.json::<serde_json::Value>()["shortUrl"].clone();
    let url_b = b.json::<serde_json::Value>()["shortUrl"].clone();
    assert_ne!(url_a, url_b);

    assert_eq!(common::count_mappings(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_rejects_malformed_input(pool: PgPool) {
    let server = TestServer::new(shorten_app(pool.clone())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_non_web_scheme(pool: PgPool) {
    let server = TestServer::new(shorten_app(pool.clone())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "ftp://x" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_collision_returns_server_error(pool: PgPool) {
    // Occupy the identifier that "https://example.com" derives with a
    // different URL, simulating a truncated-hash collision.
    common::create_test_mapping(&pool, "100680", "https://colliding.example.org").await;

    let server = TestServer::new(shorten_app(pool.clone())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");

    // The existing mapping must not be overwritten.
    let stored: String =
        sqlx::query_scalar("SELECT original_url FROM mappings WHERE short_id = $1")
            .bind("100680")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "https://colliding.example.org");
    assert_eq!(common::count_mappings(&pool).await, 1);
}
