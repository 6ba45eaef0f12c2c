//! Middleware applied to the HTTP router.

pub mod tracing;
