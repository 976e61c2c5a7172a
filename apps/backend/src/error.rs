use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Wire shape for `{"error": ...}` responses.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Wire shape for the empty-result 404, which reports under `"message"`.
#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("No results: {detail}")]
    NoResults { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
}

impl AppError {
    /// Helper method to extract error detail from any error variant
    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail }
            | AppError::NotFound { detail }
            | AppError::NoResults { detail }
            | AppError::Db { detail }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail.clone(),
            AppError::DbUnavailable => "Database connection is not configured".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::NoResults { .. } => StatusCode::NOT_FOUND,
            AppError::Db { .. }
            | AppError::Internal { .. }
            | AppError::Config { .. }
            | AppError::DbUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn no_results(detail: impl Into<String>) -> Self {
        Self::NoResults {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::Validation { detail },
            DomainError::NotFound(NotFoundKind::Facilities, detail) => {
                AppError::NoResults { detail }
            }
            DomainError::NotFound(_, detail) => AppError::NotFound { detail },
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::DbUnavailable,
            DomainError::Infra(_, detail) => AppError::Db { detail },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl From<db_infra::DbInfraError> for AppError {
    fn from(e: db_infra::DbInfraError) -> Self {
        AppError::config(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        match self {
            AppError::NoResults { detail } => HttpResponse::build(status).json(MessageBody {
                message: detail.clone(),
            }),
            _ => HttpResponse::build(status).json(ErrorBody {
                error: self.detail(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::AppError;
    use crate::errors::domain::{DomainError, NotFoundKind};

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::invalid("Facility type is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("Facility type \"spa\" not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::no_results("No spa facilities found for airport 1").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::db("timeout").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::db_unavailable().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unknown_category_maps_to_not_found() {
        let err = AppError::from(DomainError::not_found(
            NotFoundKind::FacilityType,
            "Facility type \"spa\" not found",
        ));
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn empty_result_maps_to_no_results() {
        let err = AppError::from(DomainError::not_found(
            NotFoundKind::Facilities,
            "No lounge facilities found for airport 99",
        ));
        assert!(matches!(err, AppError::NoResults { .. }));
    }
}
