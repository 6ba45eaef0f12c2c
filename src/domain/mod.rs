//! Domain layer containing business entities and data access contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits defined here are implemented by the
//! infrastructure layer; the shorten/resolve workflows live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
