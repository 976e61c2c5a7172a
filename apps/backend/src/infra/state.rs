use db_infra::config::db::DbProfile;
use db_infra::infra::db::bootstrap_db;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_profile: None }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_profile {
            // single entrypoint: connect + migrate
            Some(profile) => {
                let conn = bootstrap_db(profile).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::{build_state, DbProfile};

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_with_test_profile_connects_and_migrates() {
        let state = build_state()
            .with_db(DbProfile::Test)
            .build()
            .await
            .unwrap();
        assert!(state.db().is_some());
    }
}
