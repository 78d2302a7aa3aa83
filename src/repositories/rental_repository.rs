//! Rental repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::rentals::Rental;
use crate::error::Result;
use crate::repositories::base::{BaseRepository, Repository};

/// Rental repository implementation
pub struct RentalRepository {
    /// Base repository
    base: BaseRepository<Rental>,
}

impl RentalRepository {
    /// Create a new rental repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find rentals made by the given customer
    #[instrument(skip(self))]
    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Rental>> {
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE customer_id = ? AND deleted_at IS NULL",
        )
        .bind(customer_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find rentals handled by the given staff member
    #[instrument(skip(self))]
    pub async fn find_by_staff(&self, staff_id: i64) -> Result<Vec<Rental>> {
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE staff_id = ? AND deleted_at IS NULL",
        )
        .bind(staff_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find rentals of the given inventory item
    #[instrument(skip(self))]
    pub async fn find_by_inventory(&self, inventory_id: i64) -> Result<Vec<Rental>> {
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE inventory_id = ? AND deleted_at IS NULL",
        )
        .bind(inventory_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find rentals whose rental date falls within the given range,
    /// endpoints included
    #[instrument(skip(self))]
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Rental>> {
        debug!("Finding rentals between {} and {}", start, end);
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE rental_date BETWEEN ? AND ? AND deleted_at IS NULL",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find outstanding rentals older than the given number of days
    #[instrument(skip(self))]
    pub async fn find_overdue(&self, days: i64) -> Result<Vec<Rental>> {
        let cutoff = Utc::now() - Duration::days(days);
        debug!("Finding rentals outstanding since before {}", cutoff);
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE return_date IS NULL AND rental_date < ? AND deleted_at IS NULL",
        )
        .bind(cutoff)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find rentals that have been returned
    #[instrument(skip(self))]
    pub async fn find_returned(&self) -> Result<Vec<Rental>> {
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE return_date IS NOT NULL AND deleted_at IS NULL",
        )
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find rentals still out
    #[instrument(skip(self))]
    pub async fn find_not_returned(&self) -> Result<Vec<Rental>> {
        Ok(sqlx::query_as::<_, Rental>(
            "SELECT * FROM rental WHERE return_date IS NULL AND deleted_at IS NULL",
        )
        .fetch_all(&self.base.pool)
        .await?)
    }
}

#[async_trait]
impl Repository<Rental> for RentalRepository {
    fn base(&self) -> &BaseRepository<Rental> {
        &self.base
    }
}
