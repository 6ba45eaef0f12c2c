//! Shorten and resolve workflows.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::short_id::derive_short_id;
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Service orchestrating mapping creation and resolution.
///
/// Validates input, derives identifiers, and delegates persistence to the
/// repository. Shortening is idempotent: repeated requests for the same
/// URL always return the same mapping and never create duplicate rows.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short mapping for a URL, or returns the existing one.
    ///
    /// # Workflow
    ///
    /// 1. Reject input that is not a well-formed absolute http(s) URL,
    ///    before any store access.
    /// 2. Return the existing mapping if this exact URL was already
    ///    shortened.
    /// 3. Otherwise derive the identifier and insert. An insert conflict
    ///    is re-checked against the original URL: when a concurrent
    ///    request persisted the same URL first, its row is returned;
    ///    when a *different* URL holds the identifier, the request fails
    ///    (see below).
    ///
    /// # Collisions
    ///
    /// Identifiers are a 24-bit hash truncation, so two distinct URLs can
    /// derive the same identifier. Such a collision is not resolved with
    /// an alternate identifier; it surfaces as [`AppError::Internal`] and
    /// the existing mapping is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid input and
    /// [`AppError::Internal`] on collisions or database errors.
    pub async fn shorten(&self, original_url: String) -> Result<Mapping, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        let short_id = derive_short_id(&original_url);

        let new_mapping = NewMapping {
            short_id: short_id.clone(),
            original_url: original_url.clone(),
        };

        match self.repository.insert(new_mapping).await {
            Ok(mapping) => Ok(mapping),
            Err(AppError::Conflict { .. }) => {
                // Lost a race against another insert. Same URL: return its
                // row. Different URL: genuine hash collision, fail loudly.
                if let Some(existing) =
                    self.repository.find_by_original_url(&original_url).await?
                {
                    return Ok(existing);
                }

                tracing::error!(%short_id, "short id collision between distinct URLs");
                Err(AppError::internal(
                    "Short id already assigned to a different URL",
                    json!({ "short_id": short_id }),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short identifier to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_id: &str) -> Result<Mapping, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
            })
    }

    /// Constructs the full short URL from the configured base address.
    pub fn short_url(&self, base_url: &str, short_id: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), short_id)
    }
}
