//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! input is a separate struct ([`NewMapping`]) from the persisted record
//! ([`Mapping`]).

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
