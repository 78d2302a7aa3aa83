use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A physical copy of a film held by a store
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub inventory_id: i64,
    pub film_id: i64,
    pub store_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Inventory {
    const TABLE: &'static str = "inventory";
    const ID_COLUMN: &'static str = "inventory_id";
    const DATA_COLUMNS: &'static [&'static str] = &["film_id", "store_id"];

    fn id(&self) -> i64 {
        self.inventory_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query.bind(self.film_id).bind(self.store_id)
    }
}
