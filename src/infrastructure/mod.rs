//! Infrastructure layer with concrete persistence implementations.

pub mod persistence;
