use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Passed to handlers via `web::Data` so that no global connection state
/// exists; each request borrows the pooled connection through the state it
/// was handed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional so handler paths can be exercised without a store)
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
