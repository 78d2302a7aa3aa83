//! Film repository implementation
//!
//! Besides the usual finders, this repository maintains the film/actor
//! association table. Links are plain rows without the soft-delete
//! envelope, so adding and removing them is physical.

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

use crate::entities::films::Film;
use crate::error::{AppError, Result};
use crate::repositories::base::{BaseRepository, Repository};

/// Film repository implementation
pub struct FilmRepository {
    /// Base repository
    base: BaseRepository<Film>,
}

impl FilmRepository {
    /// Create a new film repository
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.base.pool
    }

    /// Find films whose title contains the given fragment
    #[instrument(skip(self))]
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Film>> {
        debug!("Finding films by title: {}", title);
        let pattern = format!("%{}%", title);
        Ok(sqlx::query_as::<_, Film>(
            "SELECT * FROM film WHERE title LIKE ? AND deleted_at IS NULL",
        )
        .bind(pattern)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find films in the given category
    #[instrument(skip(self))]
    pub async fn find_by_category(&self, category_id: i64) -> Result<Vec<Film>> {
        Ok(sqlx::query_as::<_, Film>(
            "SELECT * FROM film WHERE category_id = ? AND deleted_at IS NULL",
        )
        .bind(category_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find films released in the given year
    #[instrument(skip(self))]
    pub async fn find_by_release_year(&self, year: i32) -> Result<Vec<Film>> {
        Ok(sqlx::query_as::<_, Film>(
            "SELECT * FROM film WHERE release_year = ? AND deleted_at IS NULL",
        )
        .bind(year)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Find films the given actor appears in
    #[instrument(skip(self))]
    pub async fn find_by_actor(&self, actor_id: i64) -> Result<Vec<Film>> {
        debug!("Finding films by actor: {}", actor_id);
        Ok(sqlx::query_as::<_, Film>(
            "SELECT film.* FROM film \
             JOIN film_actors ON film_actors.film_id = film.film_id \
             WHERE film_actors.actor_id = ? AND film.deleted_at IS NULL",
        )
        .bind(actor_id)
        .fetch_all(&self.base.pool)
        .await?)
    }

    /// Link an actor to a film. Linking the same pair twice is a
    /// constraint violation.
    #[instrument(skip(self))]
    pub async fn add_actor(&self, film_id: i64, actor_id: i64) -> Result<()> {
        debug!("Linking actor {} to film {}", actor_id, film_id);
        sqlx::query("INSERT INTO film_actors (film_id, actor_id) VALUES (?, ?)")
            .bind(film_id)
            .bind(actor_id)
            .execute(&self.base.pool)
            .await?;
        Ok(())
    }

    /// Remove the link between a film and an actor
    #[instrument(skip(self))]
    pub async fn remove_actor(&self, film_id: i64, actor_id: i64) -> Result<()> {
        debug!("Unlinking actor {} from film {}", actor_id, film_id);
        let affected =
            sqlx::query("DELETE FROM film_actors WHERE film_id = ? AND actor_id = ?")
                .bind(film_id)
                .bind(actor_id)
                .execute(&self.base.pool)
                .await?;
        if affected.rows_affected() == 0 {
            return Err(AppError::NotFoundError(format!(
                "film {} has no link to actor {}",
                film_id, actor_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Film> for FilmRepository {
    fn base(&self) -> &BaseRepository<Film> {
        &self.base
    }
}
