use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in main, the seed CLI and tests)
#[derive(Debug, Default)]
pub struct StateBuilder {
    db_profile: DbProfile,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = profile;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // single entrypoint: connect + ensure schema
        let conn = bootstrap_db(&self.db_profile).await?;
        Ok(AppState::new(conn))
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
