use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use std::{str::FromStr, sync::Arc};
use tracing::{info, instrument};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// DatabaseManager handles SQLite connection pooling and database operations
#[derive(Clone)]
pub struct DatabaseManager {
    /// Connection pool for SQLite
    pub pool: Pool<Sqlite>,
    /// Path to the database file
    pub db_path: Arc<str>,
}

impl DatabaseManager {
    /// Creates a new DatabaseManager with a connection pool to the specified database
    #[instrument(err)]
    pub async fn new(db_path: &str) -> Result<Self> {
        info!("Initializing database at: {}", db_path);

        let pool = Pool::connect_with(Self::connect_options(db_path)?).await?;

        Ok(Self {
            pool,
            db_path: db_path.into(),
        })
    }

    /// Creates a DatabaseManager from configuration, with the pool sized
    /// per the configured connection limit
    #[instrument(skip(config), err)]
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        info!(
            "Initializing database at: {} (max {} connections)",
            config.path, config.max_connections
        );

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(Self::connect_options(&config.path)?)
            .await?;

        Ok(Self {
            pool,
            db_path: config.path.as_str().into(),
        })
    }

    fn connect_options(db_path: &str) -> Result<SqliteConnectOptions> {
        Ok(SqliteConnectOptions::from_str(db_path)?
            .foreign_keys(!cfg!(test)) // Disable foreign keys in tests to avoid errors
            // Create the database if it doesn't exist
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            // Only use NORMAL if WAL mode is enabled
            // as it provides extra performance benefits
            // at the cost of durability
            .synchronous(SqliteSynchronous::Normal))
    }

    /// Get database path
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Apply any pending schema migrations embedded in the crate
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running embedded migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool
    pub async fn close(&self) {
        info!("Closing database at: {}", self.db_path);
        self.pool.close().await;
    }

    /// Setup test database schema
    #[cfg(test)]
    pub(crate) async fn setup_test_db() -> DatabaseManager {
        let db = DatabaseManager::new(":memory:")
            .await
            .expect("Failed to initialize database");
        db.run_migrations().await.unwrap();
        db
    }
}
