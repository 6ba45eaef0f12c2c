//! URL well-formedness validation.
//!
//! Shorten requests are accepted only for absolute web URLs. Validation is
//! check-only: the input string is stored and hashed exactly as supplied,
//! never rewritten into a canonical form.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates that the input is a well-formed, absolute http(s) URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (relative references are rejected)
/// 2. Scheme must be `http` or `https`
/// 3. Must have a host
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and every other non-web scheme,
/// so a stored mapping can never redirect into one of them.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed input.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::InvalidFormat(
            "URL has no host".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_http() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_and_query() {
        assert!(validate_url("https://example.com/search?q=rust&lang=en").is_ok());
    }

    #[test]
    fn test_validate_with_port() {
        assert!(validate_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_validate_ip_address() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_validate_with_fragment() {
        assert!(validate_url("https://example.com/page#section").is_ok());
    }

    #[test]
    fn test_validate_not_a_url() {
        let result = validate_url("not a url");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_empty_string() {
        let result = validate_url("");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_no_scheme() {
        let result = validate_url("example.com");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_ftp_scheme() {
        let result = validate_url("ftp://x");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_javascript_scheme() {
        let result = validate_url("javascript:alert('xss')");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_data_scheme() {
        let result = validate_url("data:text/plain,Hello");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_file_scheme() {
        let result = validate_url("file:///home/user/document.txt");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_mailto_scheme() {
        let result = validate_url("mailto:test@example.com");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_does_not_rewrite_input() {
        // Validation accepts URLs that a normalizer would rewrite; the
        // caller keeps the original string untouched.
        assert!(validate_url("HTTPS://EXAMPLE.COM:443/Path#anchor").is_ok());
    }
}
