use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection configuration for the municipal corporation database.
///
/// Supplied through the environment (a `.env` file is honored); the four
/// named fields plus an optional port are the whole configuration surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub username: String,
    /// Only ever supplied through the environment, never persisted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

fn default_port() -> u16 {
    DEFAULT_MYSQL_PORT
}

impl DbConfig {
    /// Load the configuration from `CIVICDASH_DB_*` environment variables.
    ///
    /// `CIVICDASH_DB_HOST`, `CIVICDASH_DB_NAME` and `CIVICDASH_DB_USER` are
    /// required; `CIVICDASH_DB_PORT` defaults to 3306 and
    /// `CIVICDASH_DB_PASSWORD` to empty.
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, DashboardError> {
        let required = |key: &'static str| {
            get(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| DashboardError::Config(format!("{} is not set", key)))
        };

        let port = match get("CIVICDASH_DB_PORT") {
            Some(raw) if !raw.is_empty() => raw.parse::<u16>().map_err(|_| {
                DashboardError::Config(format!("CIVICDASH_DB_PORT is not a valid port: {}", raw))
            })?,
            _ => DEFAULT_MYSQL_PORT,
        };

        Ok(DbConfig {
            host: required("CIVICDASH_DB_HOST")?,
            port,
            database: required("CIVICDASH_DB_NAME")?,
            username: required("CIVICDASH_DB_USER")?,
            password: get("CIVICDASH_DB_PASSWORD").unwrap_or_default(),
        })
    }
}

/// Outcome of probing the backend without keeping the connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConnectionResult {
    pub success: bool,
    pub latency_ms: Option<u64>,
    pub error: Option<String>,
}
