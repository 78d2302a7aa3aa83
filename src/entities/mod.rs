//! Domain entities for the rental store
//!
//! Every entity embeds the same persistence envelope: an auto-incrementing
//! surrogate id, `created_at`/`updated_at` audit timestamps maintained by the
//! data layer, and a `deleted_at` soft-delete marker. The [`Entity`] trait
//! describes each table to the generic repository layer.

use sqlx::Sqlite;
use sqlx::prelude::FromRow;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use std::fmt::Debug;

// Core entities
pub mod actors;
pub mod categories;
pub mod customers;
pub mod films;
pub mod inventory;
pub mod payments;
pub mod rentals;
pub mod staff;
pub mod stores;

// Type re-exports
pub use actors::*;
pub use categories::*;
pub use customers::*;
pub use films::*;
pub use inventory::*;
pub use payments::*;
pub use rentals::*;
pub use staff::*;
pub use stores::*;

/// Query that maps SQLite rows into `O`
pub type SqliteQueryAs<'q, O> = sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;

/// Table description an entity provides to the generic repository layer
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Debug + Send + Sync + Unpin {
    /// Backing table name
    const TABLE: &'static str;

    /// Surrogate primary key column
    const ID_COLUMN: &'static str;

    /// Columns written on insert and update, in declaration order,
    /// excluding the surrogate id and the audit columns
    const DATA_COLUMNS: &'static [&'static str];

    /// Surrogate id; zero when the entity has not been persisted yet
    fn id(&self) -> i64;

    /// Bind the values of [`Entity::DATA_COLUMNS`] onto a query, in the
    /// same order the columns are declared
    fn bind_data<'q>(&'q self, query: SqliteQueryAs<'q, Self>) -> SqliteQueryAs<'q, Self>;
}
