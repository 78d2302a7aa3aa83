//! Base repository trait and implementations
//!
//! This module provides the base repository trait that defines the common
//! interface for all repositories, as well as the shared implementation
//! they all delegate to. SQL text is composed from the [`Entity`] consts,
//! so every entity gets the same create/read/update/soft-delete behavior.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Sqlite};
use std::marker::PhantomData;
use tracing::{debug, instrument};

use crate::entities::Entity;
use crate::error::{AppError, Result};

/// Base repository trait that defines common operations for all repositories
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Shared implementation the default methods delegate to
    fn base(&self) -> &BaseRepository<T>;

    /// Persist a new entity and return the stored row, including the
    /// assigned surrogate id and audit timestamps
    async fn create(&self, entity: &T) -> Result<T> {
        self.base().create(entity).await
    }

    /// Get the entity by ID
    async fn find_by_id(&self, id: i64) -> Result<T> {
        self.base().find_by_id(id).await
    }

    /// List all live entities
    async fn find_all(&self) -> Result<Vec<T>> {
        self.base().find_all().await
    }

    /// Overwrite an existing entity with the passed record and return
    /// the stored row
    async fn update(&self, entity: &T) -> Result<T> {
        self.base().update(entity).await
    }

    /// Soft-delete an entity
    async fn delete(&self, entity: &T) -> Result<()> {
        self.base().delete_by_id(entity.id()).await
    }

    /// Soft-delete an entity by ID
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.base().delete_by_id(id).await
    }

    /// Check if a live entity exists by ID
    async fn exists(&self, id: i64) -> Result<bool> {
        self.base().exists(id).await
    }

    /// Count live entities
    async fn count(&self) -> Result<i64> {
        self.base().count().await
    }
}

/// Base repository implementation that provides common functionality
pub struct BaseRepository<T> {
    /// Database connection pool
    pub pool: Pool<Sqlite>,
    entity: PhantomData<T>,
}

impl<T: Entity> BaseRepository<T> {
    /// Create a new base repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            entity: PhantomData,
        }
    }

    fn insert_sql() -> String {
        let columns = T::DATA_COLUMNS.join(", ");
        let placeholders = vec!["?"; T::DATA_COLUMNS.len() + 2].join(", ");
        format!(
            "INSERT INTO {} ({}, created_at, updated_at) VALUES ({}) RETURNING *",
            T::TABLE,
            columns,
            placeholders
        )
    }

    fn update_sql() -> String {
        let assignments = T::DATA_COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {}, updated_at = ? WHERE {} = ? AND deleted_at IS NULL RETURNING *",
            T::TABLE,
            assignments,
            T::ID_COLUMN
        )
    }

    #[instrument(skip(self, entity), fields(table = T::TABLE))]
    pub async fn create(&self, entity: &T) -> Result<T> {
        debug!("Creating {} row", T::TABLE);
        let now = Utc::now();
        let sql = Self::insert_sql();
        Ok(entity
            .bind_data(sqlx::query_as::<_, T>(&sql))
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?)
    }

    #[instrument(skip(self), fields(table = T::TABLE))]
    pub async fn find_by_id(&self, id: i64) -> Result<T> {
        debug!("Fetching {} with ID: {}", T::TABLE, id);
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ? AND deleted_at IS NULL",
            T::TABLE,
            T::ID_COLUMN
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(T::TABLE, id))
    }

    #[instrument(skip(self), fields(table = T::TABLE))]
    pub async fn find_all(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} WHERE deleted_at IS NULL", T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        debug!("Fetched {} {} rows", rows.len(), T::TABLE);
        Ok(rows)
    }

    #[instrument(skip(self, entity), fields(table = T::TABLE))]
    pub async fn update(&self, entity: &T) -> Result<T> {
        let id = entity.id();
        if id == 0 {
            return Err(AppError::validation(format!(
                "cannot update a {} row without an ID",
                T::TABLE
            )));
        }
        debug!("Updating {} with ID: {}", T::TABLE, id);
        let now = Utc::now();
        let sql = Self::update_sql();
        entity
            .bind_data(sqlx::query_as::<_, T>(&sql))
            .bind(now)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(T::TABLE, id))
    }

    /// Mark a row as deleted. The row stays in the table and is excluded
    /// from every default read.
    #[instrument(skip(self), fields(table = T::TABLE))]
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        if id == 0 {
            return Err(AppError::validation(format!(
                "cannot delete a {} row without an ID",
                T::TABLE
            )));
        }
        debug!("Soft-deleting {} with ID: {}", T::TABLE, id);
        let sql = format!(
            "UPDATE {} SET deleted_at = ? WHERE {} = ? AND deleted_at IS NULL",
            T::TABLE,
            T::ID_COLUMN
        );
        let affected = sqlx::query(&sql)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if affected.rows_affected() == 0 {
            return Err(AppError::not_found(T::TABLE, id));
        }
        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ? AND deleted_at IS NULL",
            T::TABLE,
            T::ID_COLUMN
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL", T::TABLE);
        Ok(sqlx::query_scalar(&sql).fetch_one(&self.pool).await?)
    }
}
