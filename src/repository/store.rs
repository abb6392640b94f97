//! # SQLite Store
//!
//! Owns the connection pool. The database file and the entity tables are
//! created on open if they do not exist yet.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

use crate::schema::EntitySchema;

use super::errors::RepositoryResult;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file (default: "database.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free connection (default: 5)
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("database.db")
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Create a config for the given database file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
            ..Default::default()
        }
    }
}

/// Pooled SQLite store
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the store, creating the database file if absent.
    pub async fn open(config: &StoreConfig) -> RepositoryResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(path = %config.database_path.display(), "store opened");

        Ok(Self { pool })
    }

    /// Creates the table and indexes for `schema` if they do not exist.
    pub async fn ensure_schema(&self, schema: &EntitySchema) -> RepositoryResult<()> {
        sqlx::query(&schema.create_table_sql())
            .execute(&self.pool)
            .await?;

        for statement in schema.create_index_sql() {
            sqlx::query(&statement).execute(&self.pool).await?;
        }

        tracing::debug!(table = %schema.table, "schema ensured");
        Ok(())
    }

    /// Acquires a connection for the duration of one unit of work.
    ///
    /// The connection goes back to the pool when the returned handle drops.
    pub async fn session(&self) -> RepositoryResult<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
