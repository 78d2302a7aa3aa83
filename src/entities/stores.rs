use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A rental store location
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub store_id: i64,
    pub store_name: String,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Store {
    const TABLE: &'static str = "store";
    const ID_COLUMN: &'static str = "store_id";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "store_name",
        "address",
        "address2",
        "district",
        "city",
        "country",
        "postal_code",
        "phone",
    ];

    fn id(&self) -> i64 {
        self.store_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query
            .bind(&self.store_name)
            .bind(&self.address)
            .bind(&self.address2)
            .bind(&self.district)
            .bind(&self.city)
            .bind(&self.country)
            .bind(&self.postal_code)
            .bind(&self.phone)
    }
}
