use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Centralized helper to access the database connection from AppState.
///
/// This is the canonical way to access the database from application code.
/// It returns a borrowed reference to the DatabaseConnection if available,
/// or an `AppError::db_unavailable()` if the database is not configured.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(AppError::db_unavailable)
}
