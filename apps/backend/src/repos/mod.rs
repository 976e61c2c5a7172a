//! Repository functions for the domain layer.

pub mod facilities;
pub mod facility_types;
