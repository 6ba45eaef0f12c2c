#![allow(dead_code)]

use linksnip::state::AppState;
use sqlx::PgPool;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool, TEST_BASE_URL.to_string())
}

pub async fn create_test_mapping(pool: &PgPool, short_id: &str, url: &str) {
    sqlx::query("INSERT INTO mappings (short_id, original_url) VALUES ($1, $2)")
        .bind(short_id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
