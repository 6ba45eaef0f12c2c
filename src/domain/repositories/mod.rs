//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
