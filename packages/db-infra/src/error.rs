use thiserror::Error;

/// Errors raised while configuring or connecting to the database.
#[derive(Debug, Error)]
pub enum DbInfraError {
    #[error("database configuration error: {message}")]
    Config { message: String },
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl DbInfraError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
