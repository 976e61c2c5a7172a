pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

mod m20260801_000001_init; // keep filename + module name in sync
mod m20260801_000002_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_init::Migration),
            Box::new(m20260801_000002_seed_reference_data::Migration),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Migration runner that bypasses environment parsing.
/// Used by both the CLI and the backend bootstrap.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let name = database_name(db).await?;

    tracing::info!("▶ cmd={command:?}  db={name}");
    tracing::info!(
        "▶ BEFORE: runner has {} migration(s) defined, {} applied",
        Migrator::migrations().len(),
        count_applied_migrations(db).await?
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if !matches!(command, MigrationCommand::Status) {
                tracing::info!(
                    "▶ AFTER: {} migration(s) applied",
                    count_applied_migrations(db).await?
                );
            }
            tracing::info!("✅ {command:?} OK for {name}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {command:?} failed for {name}: {e}");
            Err(e)
        }
    }
}

/// Resolve the SQLite database file backing the connection.
async fn database_name(db: &DatabaseConnection) -> Result<String, DbErr> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        String::from("SELECT file FROM pragma_database_list WHERE name = 'main'"),
    );

    let name = match db.query_one(stmt).await? {
        Some(row) => match row.try_get::<String>("", "file") {
            Ok(file) if file.is_empty() => ":memory:".to_string(),
            Ok(file) => file,
            Err(_) => "<unknown>".to_string(),
        },
        None => "<unknown>".to_string(),
    };

    Ok(name)
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        // Migration table doesn't exist yet
        Err(DbErr::Exec(_) | DbErr::Query(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Get the version string of the latest applied migration.
/// Returns None if no migrations have been applied or the migration table doesn't exist.
pub async fn get_latest_migration_version(db: &DatabaseConnection) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        // Migration table doesn't exist yet
        Err(DbErr::Exec(_) | DbErr::Query(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
