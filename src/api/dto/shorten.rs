//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid HTTP/HTTPS URL).
    pub original_url: String,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}
