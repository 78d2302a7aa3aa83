use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A film in the catalog, assigned to a single category. Actors are
/// linked through the `film_actors` association table.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub film_id: i64,
    pub title: String,
    pub release_year: i32,
    /// Running time in minutes
    pub length: i32,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Film {
    const TABLE: &'static str = "film";
    const ID_COLUMN: &'static str = "film_id";
    const DATA_COLUMNS: &'static [&'static str] =
        &["title", "release_year", "length", "category_id"];

    fn id(&self) -> i64 {
        self.film_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query
            .bind(&self.title)
            .bind(self.release_year)
            .bind(self.length)
            .bind(self.category_id)
    }
}
