use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A staff member employed at a store. Email and username are unique
/// across all staff.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub staff_id: i64,
    pub store_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Staff {
    const TABLE: &'static str = "staff";
    const ID_COLUMN: &'static str = "staff_id";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "store_id",
        "first_name",
        "last_name",
        "email",
        "username",
        "address",
        "address2",
        "district",
        "city",
        "country",
        "postal_code",
        "phone",
        "active",
    ];

    fn id(&self) -> i64 {
        self.staff_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query
            .bind(self.store_id)
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.email)
            .bind(&self.username)
            .bind(&self.address)
            .bind(&self.address2)
            .bind(&self.district)
            .bind(&self.city)
            .bind(&self.country)
            .bind(&self.postal_code)
            .bind(&self.phone)
            .bind(self.active)
    }
}
