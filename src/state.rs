use sqlx::MySqlPool;
use tokio::sync::OnceCell;

use crate::db::mysql;
use crate::error::{sanitize_error, DashboardError};
use crate::models::DbConfig;

/// Owns the database configuration and the shared connection pool.
///
/// One value is constructed at process start and passed by reference into
/// every query call, so the whole process shares a single pool. The pool is
/// created on first use; a failed attempt leaves the cell empty, and the
/// next call tries to establish it again.
pub struct DashboardState {
    config: DbConfig,
    pool: OnceCell<MySqlPool>,
}

impl DashboardState {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Build the state from `CIVICDASH_DB_*` environment variables.
    pub fn from_env() -> Result<Self, DashboardError> {
        Ok(Self::new(DbConfig::from_env()?))
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Shared connection pool, created at most once and reused by every
    /// query operation.
    pub async fn pool(&self) -> Result<&MySqlPool, DashboardError> {
        self.pool
            .get_or_try_init(|| async {
                mysql::create_pool(&self.config).await.map_err(|e| {
                    let message = sanitize_error(&e.to_string());
                    log::error!("Error connecting to MySQL database: {}", message);
                    DashboardError::Connection(message)
                })
            })
            .await
    }
}
