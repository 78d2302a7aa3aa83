use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A film category. Names are unique.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Category {
    const TABLE: &'static str = "category";
    const ID_COLUMN: &'static str = "category_id";
    const DATA_COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> i64 {
        self.category_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query.bind(&self.name)
    }
}
