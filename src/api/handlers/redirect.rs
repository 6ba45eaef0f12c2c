//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is not assigned.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.mapping_service.resolve(&short_id).await?;

    debug!(%short_id, original_url = %mapping.original_url, "redirecting");

    Ok(Redirect::temporary(&mapping.original_url))
}
