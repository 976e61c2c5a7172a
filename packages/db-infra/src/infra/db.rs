//! Database connection bootstrap shared by the backend and the migration CLI.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, is_memory_url, DbProfile};
use crate::error::DbInfraError;

/// Connect to the database for the given profile without touching the schema.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, DbInfraError> {
    let url = db_url(profile)?;

    let mut opt = ConnectOptions::new(&url);
    opt.acquire_timeout(Duration::from_secs(2)).sqlx_logging(false);

    // Every pooled connection to an in-memory SQLite database sees its own
    // empty database, so the pool is pinned to a single connection there.
    if is_memory_url(&url) {
        opt.min_connections(1).max_connections(1);
    }

    let conn = Database::connect(opt).await?;
    info!(profile = ?profile, "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
/// Single entrypoint used by the backend when building application state.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, DbInfraError> {
    let conn = connect_db(profile).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}
