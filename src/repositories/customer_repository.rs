//! Customer repository implementation

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::customers::Customer;
use crate::error::{AppError, Result};
use crate::repositories::base::{BaseRepository, Repository};

/// Customer repository implementation
pub struct CustomerRepository {
    /// Base repository
    base: BaseRepository<Customer>,
}

impl CustomerRepository {
    /// Create a new customer repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find customers whose first or last name contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Customer>> {
        debug!("Finding customers by name: {}", name);
        let pattern = format!("%{}%", name);
        Ok(sqlx::query_as::<_, Customer>(
            "SELECT * FROM customer WHERE (first_name LIKE ? OR last_name LIKE ?) AND deleted_at IS NULL",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find the customer with the given email
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Customer> {
        sqlx::query_as::<_, Customer>(
            "SELECT * FROM customer WHERE email = ? AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(&self.base.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundError(format!("customer with email {} not found", email))
        })
    }

    /// Find customers registered at the given store
    #[instrument(skip(self))]
    pub async fn find_by_store(&self, store_id: i64) -> Result<Vec<Customer>> {
        Ok(sqlx::query_as::<_, Customer>(
            "SELECT * FROM customer WHERE store_id = ? AND deleted_at IS NULL",
        )
        .bind(store_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find customers marked active
    #[instrument(skip(self))]
    pub async fn find_active(&self) -> Result<Vec<Customer>> {
        Ok(sqlx::query_as::<_, Customer>(
            "SELECT * FROM customer WHERE active = ? AND deleted_at IS NULL",
        )
        .bind(true)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find customers marked inactive
    #[instrument(skip(self))]
    pub async fn find_inactive(&self) -> Result<Vec<Customer>> {
        Ok(sqlx::query_as::<_, Customer>(
            "SELECT * FROM customer WHERE active = ? AND deleted_at IS NULL",
        )
        .bind(false)
        .fetch_all(&self.base.pool)
        .await?)
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    fn base(&self) -> &BaseRepository<Customer> {
        &self.base
    }
}
