//! Inventory repository implementation
//!
//! Availability is an anti-join: a copy is available when no live rental
//! row with an open return references it. Soft-deleted rentals never
//! block a copy.

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::inventory::Inventory;
use crate::error::Result;
use crate::repositories::base::{BaseRepository, Repository};

const AVAILABLE_SQL: &str = "SELECT inventory.* FROM inventory \
    LEFT JOIN rental ON rental.inventory_id = inventory.inventory_id \
    AND rental.return_date IS NULL AND rental.deleted_at IS NULL \
    WHERE rental.rental_id IS NULL AND inventory.deleted_at IS NULL";

/// Inventory repository implementation
pub struct InventoryRepository {
    /// Base repository
    base: BaseRepository<Inventory>,
}

impl InventoryRepository {
    /// Create a new inventory repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find all copies of the given film
    #[instrument(skip(self))]
    pub async fn find_by_film(&self, film_id: i64) -> Result<Vec<Inventory>> {
        Ok(sqlx::query_as::<_, Inventory>(
            "SELECT * FROM inventory WHERE film_id = ? AND deleted_at IS NULL",
        )
        .bind(film_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find all copies held by the given store
    #[instrument(skip(self))]
    pub async fn find_by_store(&self, store_id: i64) -> Result<Vec<Inventory>> {
        Ok(sqlx::query_as::<_, Inventory>(
            "SELECT * FROM inventory WHERE store_id = ? AND deleted_at IS NULL",
        )
        .bind(store_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find copies of the given film held by the given store
    #[instrument(skip(self))]
    pub async fn find_by_film_and_store(
        &self,
        film_id: i64,
        store_id: i64,
    ) -> Result<Vec<Inventory>> {
        Ok(sqlx::query_as::<_, Inventory>(
            "SELECT * FROM inventory WHERE film_id = ? AND store_id = ? AND deleted_at IS NULL",
        )
        .bind(film_id)
        .bind(store_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find copies not currently rented out
    #[instrument(skip(self))]
    pub async fn find_available(&self) -> Result<Vec<Inventory>> {
        let rows = sqlx::query_as::<_, Inventory>(AVAILABLE_SQL)
            .fetch_all(&self.base.pool)
            .await?;
        debug!("Found {} available copies", rows.len());
        Ok(rows)
    }

    /// Find available copies of the given film
    #[instrument(skip(self))]
    pub async fn find_available_by_film(&self, film_id: i64) -> Result<Vec<Inventory>> {
        let sql = format!("{} AND inventory.film_id = ?", AVAILABLE_SQL);
        Ok(sqlx::query_as::<_, Inventory>(&sql)
            .bind(film_id)
            .fetch_all(&self.base.pool)
            .await?)
    }

    /// Find available copies held by the given store
    #[instrument(skip(self))]
    pub async fn find_available_by_store(&self, store_id: i64) -> Result<Vec<Inventory>> {
        let sql = format!("{} AND inventory.store_id = ?", AVAILABLE_SQL);
        Ok(sqlx::query_as::<_, Inventory>(&sql)
            .bind(store_id)
            .fetch_all(&self.base.pool)
            .await?)
    }
}

#[async_trait]
impl Repository<Inventory> for InventoryRepository {
    fn base(&self) -> &BaseRepository<Inventory> {
        &self.base
    }
}
