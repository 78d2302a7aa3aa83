//! Category repository implementation

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::categories::Category;
use crate::error::Result;
use crate::repositories::base::{BaseRepository, Repository};

/// Category repository implementation
pub struct CategoryRepository {
    /// Base repository
    base: BaseRepository<Category>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find categories whose name contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Category>> {
        debug!("Finding categories by name: {}", name);
        let pattern = format!("%{}%", name);
        Ok(sqlx::query_as::<_, Category>(
            "SELECT * FROM category WHERE name LIKE ? AND deleted_at IS NULL",
        )
        .bind(pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }
}

#[async_trait]
impl Repository<Category> for CategoryRepository {
    fn base(&self) -> &BaseRepository<Category> {
        &self.base
    }
}
