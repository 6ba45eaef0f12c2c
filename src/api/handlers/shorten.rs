//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:3000/100680" }
/// ```
///
/// Shortening the same URL again returns the same short URL without
/// creating a new record.
///
/// # Errors
///
/// Returns 400 Bad Request for input that is not an absolute http(s) URL.
/// Returns 500 Internal Server Error on an identifier collision or a
/// database failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let mapping = state.mapping_service.shorten(payload.original_url).await?;

    let short_url = state
        .mapping_service
        .short_url(&state.base_url, &mapping.short_id);

    Ok(Json(ShortenResponse { short_url }))
}
