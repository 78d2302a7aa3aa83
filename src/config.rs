//! Database configuration loaded from the environment
//!
//! Host processes configure the layer through environment variables, with a
//! local `.env` file honored for development.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable naming the SQLite database location
pub const ENV_DB_PATH: &str = "DVDSTORE_DB_PATH";
/// Environment variable bounding the connection pool size
pub const ENV_MAX_CONNECTIONS: &str = "DVDSTORE_MAX_CONNECTIONS";

const DEFAULT_DB_PATH: &str = "dvdstore.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or `:memory:`
    pub path: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DB_PATH.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path =
            std::env::var(ENV_DB_PATH).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

        let max_connections = match std::env::var(ENV_MAX_CONNECTIONS) {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::validation(format!(
                    "{} must be a positive integer, got {:?}",
                    ENV_MAX_CONNECTIONS, raw
                ))
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            path,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, DEFAULT_DB_PATH);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
