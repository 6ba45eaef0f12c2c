//! Business logic services orchestrating the domain layer.

pub mod mapping_service;

pub use mapping_service::MappingService;
