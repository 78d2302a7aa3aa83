//! Data access layer for a DVD rental store
//!
//! Typed repositories over SQLite for the rental domain: stores, staff,
//! customers, categories, films, actors, inventory, rentals and payments.
//! Every repository shares the same CRUD contract through
//! [`repositories::Repository`], rows are soft-deleted rather than removed,
//! and per-entity finders cover the domain queries (substring searches,
//! foreign-key lookups, date and amount ranges, inventory availability,
//! payment totals).
//!
//! Typical wiring:
//!
//! ```no_run
//! use dvdstore::{DatabaseConfig, DatabaseManager, Repositories};
//!
//! # async fn run() -> dvdstore::Result<()> {
//! let config = DatabaseConfig::from_env()?;
//! let db = DatabaseManager::from_config(&config).await?;
//! db.run_migrations().await?;
//!
//! let repos = Repositories::new(db.pool.clone());
//! let films = repos.films.find_by_title("Heat").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entities;
pub mod error;
pub mod logging;
pub mod repositories;
pub mod storage;

pub use config::DatabaseConfig;
pub use error::{AppError, ErrorCategory, Result};
pub use repositories::{Repositories, Repository, RepositoryFactory};
pub use storage::db::DatabaseManager;
