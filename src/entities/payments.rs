use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::entities::{Entity, SqliteQueryAs};

/// A payment settling a rental. Each rental has at most one payment.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i64,
    pub customer_id: i64,
    pub staff_id: i64,
    pub rental_id: i64,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Payment {
    const TABLE: &'static str = "payment";
    const ID_COLUMN: &'static str = "payment_id";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "staff_id",
        "rental_id",
        "amount",
        "payment_date",
    ];

    fn id(&self) -> i64 {
        self.payment_id
    }

    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self> {
        query
            .bind(self.customer_id)
            .bind(self.staff_id)
            .bind(self.rental_id)
            .bind(self.amount)
            .bind(self.payment_date)
    }
}
