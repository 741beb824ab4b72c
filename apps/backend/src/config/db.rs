use std::env;

use crate::error::AppError;

/// Environment variable naming the SQLite database file.
pub const DB_PATH_VAR: &str = "STOREFRONT_DB_PATH";
/// Database file used when neither the profile nor the environment names one.
pub const DEFAULT_DB_PATH: &str = "data.sqlite";

/// Where the relational store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Single-file SQLite database. `None` resolves through `STOREFRONT_DB_PATH`
    /// and then `data.sqlite`.
    SqliteFile { path: Option<String> },
    /// Private in-memory SQLite database (tests).
    InMemory,
}

impl Default for DbProfile {
    fn default() -> Self {
        DbProfile::SqliteFile { path: None }
    }
}

impl DbProfile {
    pub fn is_memory(&self) -> bool {
        matches!(self, DbProfile::InMemory)
    }
}

/// Builds a SeaORM/sqlx connection URL for the profile.
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => env::var(DB_PATH_VAR).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            };
            if path.trim().is_empty() {
                return Err(AppError::config(format!(
                    "{DB_PATH_VAR} must name a database file, got an empty path"
                )));
            }
            // mode=rwc creates the file on first start
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
    }
}
