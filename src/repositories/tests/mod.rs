//! Test utilities for repositories
//!
//! This module provides utilities for testing repositories, including
//! test data generation and verification helpers. Every test runs against
//! a fresh in-memory database with the embedded migrations applied.

use sqlx::{Pool, Sqlite};

use crate::error::Result;
use crate::storage::db::DatabaseManager;

mod category_repository_test;
mod factory_test;
mod film_repository_test;

/// Initialize an in-memory database for testing
pub async fn setup_test_db() -> Pool<Sqlite> {
    let db = DatabaseManager::setup_test_db().await;
    db.pool.clone()
}

/// Count rows in a table ignoring the soft-delete scope
pub async fn raw_row_count(pool: &Pool<Sqlite>, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    Ok(sqlx::query_scalar(&sql).fetch_one(pool).await?)
}

/// Test data generator for repositories
pub mod generators {
    use chrono::{NaiveDate, Utc};

    use crate::entities::actors::Actor;
    use crate::entities::categories::Category;
    use crate::entities::customers::Customer;
    use crate::entities::films::Film;
    use crate::entities::inventory::Inventory;
    use crate::entities::payments::Payment;
    use crate::entities::rentals::Rental;
    use crate::entities::staff::Staff;
    use crate::entities::stores::Store;

    /// Generate a test store
    pub fn store() -> Store {
        let now = Utc::now();
        Store {
            store_id: 0,
            store_name: "Downtown Video".to_string(),
            address: "1913 Hanoi Way".to_string(),
            address2: None,
            district: "Nagasaki".to_string(),
            city: "Sasebo".to_string(),
            country: "Japan".to_string(),
            postal_code: "35200".to_string(),
            phone: "28303384290".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test staff member with a unique username
    pub fn staff(store_id: i64, username: &str) -> Staff {
        let now = Utc::now();
        Staff {
            staff_id: 0,
            store_id,
            first_name: "Mike".to_string(),
            last_name: "Hillyer".to_string(),
            email: format!("{}@dvdstore.test", username),
            username: username.to_string(),
            address: "23 Workhaven Lane".to_string(),
            address2: None,
            district: "Alberta".to_string(),
            city: "Lethbridge".to_string(),
            country: "Canada".to_string(),
            postal_code: "T1K5X9".to_string(),
            phone: "14033335568".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test customer with the given email
    pub fn customer(store_id: i64, email: &str) -> Customer {
        let now = Utc::now();
        Customer {
            customer_id: 0,
            store_id,
            first_name: "Mary".to_string(),
            last_name: "Smith".to_string(),
            email: email.to_string(),
            address: "1913 Hanoi Way".to_string(),
            address2: None,
            district: "Nagasaki".to_string(),
            city: "Sasebo".to_string(),
            country: "Japan".to_string(),
            postal_code: "35200".to_string(),
            phone: "28303384290".to_string(),
            active: true,
            create_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test category
    pub fn category(name: &str) -> Category {
        let now = Utc::now();
        Category {
            category_id: 0,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test film in the given category
    pub fn film(title: &str, category_id: i64) -> Film {
        let now = Utc::now();
        Film {
            film_id: 0,
            title: title.to_string(),
            release_year: 1995,
            length: 170,
            category_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test actor
    pub fn actor(first_name: &str, last_name: &str) -> Actor {
        let now = Utc::now();
        Actor {
            actor_id: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test inventory copy
    pub fn inventory(film_id: i64, store_id: i64) -> Inventory {
        let now = Utc::now();
        Inventory {
            inventory_id: 0,
            film_id,
            store_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate an outstanding rental made now
    pub fn rental(inventory_id: i64, customer_id: i64, staff_id: i64) -> Rental {
        let now = Utc::now();
        Rental {
            rental_id: 0,
            rental_date: now,
            inventory_id,
            customer_id,
            staff_id,
            return_date: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Generate a test payment settling the given rental
    pub fn payment(customer_id: i64, staff_id: i64, rental_id: i64, amount: f64) -> Payment {
        let now = Utc::now();
        Payment {
            payment_id: 0,
            customer_id,
            staff_id,
            rental_id,
            amount,
            payment_date: now,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Test assertions for repositories
pub mod assertions {
    use crate::entities::Entity;
    use crate::error::Result;
    use crate::repositories::base::Repository;

    /// Assert that a live entity with the given ID exists
    pub async fn assert_exists<T, R>(repo: &R, id: i64) -> Result<()>
    where
        T: Entity,
        R: Repository<T>,
    {
        assert!(
            repo.exists(id).await?,
            "{} with ID {} should exist",
            T::TABLE,
            id
        );
        Ok(())
    }

    /// Assert that no live entity with the given ID exists
    pub async fn assert_not_exists<T, R>(repo: &R, id: i64) -> Result<()>
    where
        T: Entity,
        R: Repository<T>,
    {
        assert!(
            !repo.exists(id).await?,
            "{} with ID {} should not exist",
            T::TABLE,
            id
        );
        Ok(())
    }

    /// Assert that the live entity count matches the expected count
    pub async fn assert_count<T, R>(repo: &R, expected: i64) -> Result<()>
    where
        T: Entity,
        R: Repository<T>,
    {
        let count = repo.count().await?;
        assert_eq!(count, expected, "{} count should be {}", T::TABLE, expected);
        Ok(())
    }

    /// Assert that a result failed with a not-found error
    pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T>) {
        match result {
            Err(err) => assert!(
                err.is_not_found(),
                "expected a not-found error, got {:?}",
                err
            ),
            Ok(value) => panic!("expected a not-found error, got {:?}", value),
        }
    }

    /// Assert that a result failed with a constraint violation
    pub fn assert_constraint_violation<T: std::fmt::Debug>(result: Result<T>) {
        match result {
            Err(err) => assert!(
                matches!(err, crate::error::AppError::ConstraintViolation(_)),
                "expected a constraint violation, got {:?}",
                err
            ),
            Ok(value) => panic!("expected a constraint violation, got {:?}", value),
        }
    }

    /// Collect the surrogate ids of the given rows
    pub fn ids<T: Entity>(rows: &[T]) -> Vec<i64> {
        rows.iter().map(|row| row.id()).collect()
    }
}
