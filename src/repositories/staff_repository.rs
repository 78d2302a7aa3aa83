//! Staff repository implementation

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::staff::Staff;
use crate::error::{AppError, Result};
use crate::repositories::base::{BaseRepository, Repository};

/// Staff repository implementation
pub struct StaffRepository {
    /// Base repository
    base: BaseRepository<Staff>,
}

impl StaffRepository {
    /// Create a new staff repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find staff whose first or last name contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Staff>> {
        debug!("Finding staff by name: {}", name);
        let pattern = format!("%{}%", name);
        Ok(sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE (first_name LIKE ? OR last_name LIKE ?) AND deleted_at IS NULL",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find the staff member with the given email
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Staff> {
        sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE email = ? AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(&self.base.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundError(format!("staff with email {} not found", email))
        })
    }

    /// Find the staff member with the given username
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Staff> {
        sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE username = ? AND deleted_at IS NULL",
        )
        .bind(username)
        .fetch_optional(&self.base.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundError(format!("staff with username {} not found", username))
        })
    }

    /// Find staff working at the given store
    #[instrument(skip(self))]
    pub async fn find_by_store(&self, store_id: i64) -> Result<Vec<Staff>> {
        Ok(sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE store_id = ? AND deleted_at IS NULL",
        )
        .bind(store_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find staff marked active
    #[instrument(skip(self))]
    pub async fn find_active(&self) -> Result<Vec<Staff>> {
        Ok(sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE active = ? AND deleted_at IS NULL",
        )
        .bind(true)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find staff marked inactive
    #[instrument(skip(self))]
    pub async fn find_inactive(&self) -> Result<Vec<Staff>> {
        Ok(sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE active = ? AND deleted_at IS NULL",
        )
        .bind(false)
        .fetch_all(&self.base.pool)
        .await?)
    }
}

#[async_trait]
impl Repository<Staff> for StaffRepository {
    fn base(&self) -> &BaseRepository<Staff> {
        &self.base
    }
}
