//! Payment repository implementation
//!
//! Totals are recomputed with SUM on demand rather than kept as running
//! balances. A sum over no matching payments is 0.0, not an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::payments::Payment;
use crate::error::{AppError, Result};
use crate::repositories::base::{BaseRepository, Repository};

/// Payment repository implementation
pub struct PaymentRepository {
    /// Base repository
    base: BaseRepository<Payment>,
}

impl PaymentRepository {
    /// Create a new payment repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find payments made by the given customer
    #[instrument(skip(self))]
    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Payment>> {
        Ok(sqlx::query_as::<_, Payment>(
            "SELECT * FROM payment WHERE customer_id = ? AND deleted_at IS NULL",
        )
        .bind(customer_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find payments taken by the given staff member
    #[instrument(skip(self))]
    pub async fn find_by_staff(&self, staff_id: i64) -> Result<Vec<Payment>> {
        Ok(sqlx::query_as::<_, Payment>(
            "SELECT * FROM payment WHERE staff_id = ? AND deleted_at IS NULL",
        )
        .bind(staff_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find the payment settling the given rental
    #[instrument(skip(self))]
    pub async fn find_by_rental(&self, rental_id: i64) -> Result<Payment> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payment WHERE rental_id = ? AND deleted_at IS NULL",
        )
        .bind(rental_id)
        .fetch_optional(&self.base.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundError(format!("payment for rental {} not found", rental_id))
        })
    }

    /// Find payments whose payment date falls within the given range,
    /// endpoints included
    #[instrument(skip(self))]
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Payment>> {
        debug!("Finding payments between {} and {}", start, end);
        Ok(sqlx::query_as::<_, Payment>(
            "SELECT * FROM payment WHERE payment_date BETWEEN ? AND ? AND deleted_at IS NULL",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find payments whose amount falls within the given range,
    /// endpoints included
    #[instrument(skip(self))]
    pub async fn find_by_amount_range(&self, min: f64, max: f64) -> Result<Vec<Payment>> {
        Ok(sqlx::query_as::<_, Payment>(
            "SELECT * FROM payment WHERE amount BETWEEN ? AND ? AND deleted_at IS NULL",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Total amount the given customer has paid
    #[instrument(skip(self))]
    pub async fn total_payments_by_customer(&self, customer_id: i64) -> Result<f64> {
        let total: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(amount) FROM payment WHERE customer_id = ? AND deleted_at IS NULL",
        )
        .bind(customer_id)
        .fetch_one(&self.base.pool)
        .await?;
        Ok(total.unwrap_or(0.0))
    }

    /// Total amount taken at the given store, attributed through the
    /// staff member who handled each payment
    #[instrument(skip(self))]
    pub async fn total_payments_by_store(&self, store_id: i64) -> Result<f64> {
        let total: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(payment.amount) FROM payment \
             JOIN staff ON payment.staff_id = staff.staff_id \
             WHERE staff.store_id = ? AND payment.deleted_at IS NULL",
        )
        .bind(store_id)
        .fetch_one(&self.base.pool)
        .await?;
        Ok(total.unwrap_or(0.0))
    }
}

#[async_trait]
impl Repository<Payment> for PaymentRepository {
    fn base(&self) -> &BaseRepository<Payment> {
        &self.base
    }
}
