//! PostgreSQL repository implementations.

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
