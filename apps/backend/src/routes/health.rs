use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// Probe the store with a trivial query and report the latest applied
/// migration. Failures are reported in-band, never as a non-200 status.
async fn db_report(db: &DatabaseConnection) -> (String, Option<String>, String) {
    let probe = sea_orm::Statement::from_string(
        db.get_database_backend(),
        "SELECT 1 AS health_check".to_string(),
    );

    match db.query_one(probe).await {
        Ok(_) => {
            let migrations = match get_latest_migration_version(db).await {
                Ok(Some(version)) => version,
                Ok(None) => "no_migrations".to_string(),
                Err(_) => "unknown".to_string(),
            };
            ("ok".to_string(), None, migrations)
        }
        Err(e) => (
            "error".to_string(),
            Some(format!("DB query failed: {e}")),
            "unknown".to_string(),
        ),
    }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db_status, db_error, migrations) = match require_db(&app_state) {
        Ok(db) => db_report(db).await,
        Err(e) => (
            "error".to_string(),
            Some(format!("DB unavailable: {e}")),
            "unknown".to_string(),
        ),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        db: db_status,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
