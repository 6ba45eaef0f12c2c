//! Short identifier derivation.
//!
//! An identifier is the first 6 lowercase hex characters of the SHA-256
//! digest of the exact input URL string. The input is hashed byte-for-byte
//! with no normalization, so the same string always derives the same
//! identifier.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
const SHORT_ID_LENGTH: usize = 6;

/// Derives the short identifier for a URL.
///
/// Deterministic and pure. Note that 6 hex characters give only 2^24
/// possible identifiers, so two distinct URLs can derive the same one;
/// such a collision is rejected by the store's uniqueness constraint at
/// insert time rather than resolved here.
///
/// # Examples
///
/// ```
/// use linksnip::utils::short_id::derive_short_id;
///
/// assert_eq!(derive_short_id("https://example.com"), "100680");
/// ```
pub fn derive_short_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(SHORT_ID_LENGTH);
    id
}
