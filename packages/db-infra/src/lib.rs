//! Shared database configuration and connection infrastructure.
//! Used by the backend and the migration CLI.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db::{db_url, DbProfile};
pub use error::DbInfraError;
pub use infra::db::{bootstrap_db, connect_db};
