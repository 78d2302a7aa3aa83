use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A rental of one inventory item by a customer, handled by a staff
/// member. `return_date` stays `None` while the rental is outstanding.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub rental_id: i64,
    pub rental_date: DateTime<Utc>,
    pub inventory_id: i64,
    pub customer_id: i64,
    pub staff_id: i64,
    pub return_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Rental {
    const TABLE: &'static str = "rental";
    const ID_COLUMN: &'static str = "rental_id";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "rental_date",
        "inventory_id",
        "customer_id",
        "staff_id",
        "return_date",
    ];

    fn id(&self) -> i64 {
        self.rental_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query
            .bind(self.rental_date)
            .bind(self.inventory_id)
            .bind(self.customer_id)
            .bind(self.staff_id)
            .bind(self.return_date)
    }
}
