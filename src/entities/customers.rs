use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A customer registered at a store. `create_date` is the business-level
/// signup date, distinct from the row's `created_at` audit timestamp.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i64,
    pub store_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
    pub active: bool,
    pub create_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Customer {
    const TABLE: &'static str = "customer";
    const ID_COLUMN: &'static str = "customer_id";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "store_id",
        "first_name",
        "last_name",
        "email",
        "address",
        "address2",
        "district",
        "city",
        "country",
        "postal_code",
        "phone",
        "active",
        "create_date",
    ];

    fn id(&self) -> i64 {
        self.customer_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query
            .bind(self.store_id)
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.email)
            .bind(&self.address)
            .bind(&self.address2)
            .bind(&self.district)
            .bind(&self.city)
            .bind(&self.country)
            .bind(&self.postal_code)
            .bind(&self.phone)
            .bind(self.active)
            .bind(self.create_date)
    }
}
