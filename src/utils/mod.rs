//! Utility functions for identifier derivation and URL validation.
//!
//! - [`short_id`] - Short identifier derivation from a URL
//! - [`url_validator`] - URL well-formedness and scheme checks

pub mod short_id;
pub mod url_validator;
