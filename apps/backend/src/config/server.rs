use std::env;

use crate::error::AppError;

pub const HOST_VAR: &str = "STOREFRONT_HOST";
pub const PORT_VAR: &str = "STOREFRONT_PORT";

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Reads `STOREFRONT_HOST` / `STOREFRONT_PORT`, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let host = env::var(HOST_VAR).unwrap_or(defaults.host);
        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("{PORT_VAR} must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => defaults.port,
        };
        Ok(Self { host, port })
    }
}
