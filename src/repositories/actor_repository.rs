//! Actor repository implementation

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::actors::Actor;
use crate::error::Result;
use crate::repositories::base::{BaseRepository, Repository};

/// Actor repository implementation
pub struct ActorRepository {
    /// Base repository
    base: BaseRepository<Actor>,
}

impl ActorRepository {
    /// Create a new actor repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find actors whose first or last name contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Actor>> {
        debug!("Finding actors by name: {}", name);
        let pattern = format!("%{}%", name);
        Ok(sqlx::query_as::<_, Actor>(
            "SELECT * FROM actor WHERE (first_name LIKE ? OR last_name LIKE ?) AND deleted_at IS NULL",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find the cast of the given film
    #[instrument(skip(self))]
    pub async fn find_by_film(&self, film_id: i64) -> Result<Vec<Actor>> {
        debug!("Finding actors by film: {}", film_id);
        Ok(sqlx::query_as::<_, Actor>(
            "SELECT actor.* FROM actor \
             JOIN film_actors ON film_actors.actor_id = actor.actor_id \
             WHERE film_actors.film_id = ? AND actor.deleted_at IS NULL",
        )
        .bind(film_id)
        .fetch_all(&self.base.pool)
        .await?)
    }
}

#[async_trait]
impl Repository<Actor> for ActorRepository {
    fn base(&self) -> &BaseRepository<Actor> {
        &self.base
    }
}
