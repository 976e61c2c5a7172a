//! Service layer - domain operations used by the HTTP handlers.

pub mod facilities;
