use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Actor {
    const TABLE: &'static str = "actor";
    const ID_COLUMN: &'static str = "actor_id";
    const DATA_COLUMNS: &'static [&'static str] = &["first_name", "last_name"];

    fn id(&self) -> i64 {
        self.actor_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query.bind(&self.first_name).bind(&self.last_name)
    }
}
