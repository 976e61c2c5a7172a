#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use db_infra::config::db::DbProfile;
pub use error::AppError;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
