//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Uniqueness of `short_id` is carried by the `mappings_short_id_key`
/// constraint, so concurrent inserts of the same identifier are decided
/// atomically by the database.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO mappings (short_id, original_url)
            VALUES ($1, $2)
            RETURNING id, short_id, original_url, created_at
            "#,
        )
        .bind(&new_mapping.short_id)
        .bind(&new_mapping.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, short_id, original_url, created_at
            FROM mappings
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, short_id, original_url, created_at
            FROM mappings
            WHERE original_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }
}
