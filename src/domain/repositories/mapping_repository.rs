//! Repository trait for mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable mapping store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// Uniqueness of `short_id` is enforced by the store itself, not by an
    /// application-level pre-check, so concurrent inserts cannot race past it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its exact original URL.
    ///
    /// Used to make shorten requests idempotent: a URL that was already
    /// shortened resolves to its existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError>;
}
