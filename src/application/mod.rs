//! Application layer implementing use cases over the domain layer.

pub mod services;
