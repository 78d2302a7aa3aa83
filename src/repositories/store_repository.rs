//! Store repository implementation

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::stores::Store;
use crate::error::Result;
use crate::repositories::base::{BaseRepository, Repository};

/// Store repository implementation
pub struct StoreRepository {
    /// Base repository
    base: BaseRepository<Store>,
}

impl StoreRepository {
    /// Create a new store repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find stores whose name contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Store>> {
        debug!("Finding stores by name: {}", name);
        let pattern = format!("%{}%", name);
        Ok(sqlx::query_as::<_, Store>(
            "SELECT * FROM store WHERE store_name LIKE ? AND deleted_at IS NULL",
        )
        .bind(pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find stores whose city contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Store>> {
        let pattern = format!("%{}%", city);
        Ok(sqlx::query_as::<_, Store>(
            "SELECT * FROM store WHERE city LIKE ? AND deleted_at IS NULL",
        )
        .bind(pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find stores whose country contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_country(&self, country: &str) -> Result<Vec<Store>> {
        let pattern = format!("%{}%", country);
        Ok(sqlx::query_as::<_, Store>(
            "SELECT * FROM store WHERE country LIKE ? AND deleted_at IS NULL",
        )
        .bind(pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }
}

#[async_trait]
impl Repository<Store> for StoreRepository {
    fn base(&self) -> &BaseRepository<Store> {
        &self.base
    }
}
