//! Mapping entity representing a shortened URL association.

use chrono::{DateTime, Utc};

/// A persisted association between a short identifier and an original URL.
///
/// Created once on the first shorten request for a URL; never updated or
/// deleted afterwards. `short_id` is globally unique.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_id,
            original_url,
            created_at,
        }
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub short_id: String,
    pub original_url: String,
}
