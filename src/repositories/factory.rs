//! Repository factory for creating repositories
//!
//! This module provides a factory for creating repositories for different entity types.
//! It centralizes the creation of repositories and ensures that they all use the same
//! database connection pool.

use sqlx::{Pool, Sqlite};

use crate::repositories::actor_repository::ActorRepository;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::film_repository::FilmRepository;
use crate::repositories::inventory_repository::InventoryRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::staff_repository::StaffRepository;
use crate::repositories::store_repository::StoreRepository;

/// Repository factory for creating repositories
#[derive(Clone)]
pub struct RepositoryFactory {
    /// Database connection pool
    pool: Pool<Sqlite>,
}

impl RepositoryFactory {
    /// Create a new repository factory
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create a store repository
    pub fn create_store_repository(&self) -> StoreRepository {
        StoreRepository::new(self.pool.clone())
    }

    /// Create a staff repository
    pub fn create_staff_repository(&self) -> StaffRepository {
        StaffRepository::new(self.pool.clone())
    }

    /// Create a customer repository
    pub fn create_customer_repository(&self) -> CustomerRepository {
        CustomerRepository::new(self.pool.clone())
    }

    /// Create a category repository
    pub fn create_category_repository(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Create a film repository
    pub fn create_film_repository(&self) -> FilmRepository {
        FilmRepository::new(self.pool.clone())
    }

    /// Create an actor repository
    pub fn create_actor_repository(&self) -> ActorRepository {
        ActorRepository::new(self.pool.clone())
    }

    /// Create an inventory repository
    pub fn create_inventory_repository(&self) -> InventoryRepository {
        InventoryRepository::new(self.pool.clone())
    }

    /// Create a rental repository
    pub fn create_rental_repository(&self) -> RentalRepository {
        RentalRepository::new(self.pool.clone())
    }

    /// Create a payment repository
    pub fn create_payment_repository(&self) -> PaymentRepository {
        PaymentRepository::new(self.pool.clone())
    }
}

/// Every repository in the layer, constructed over a shared pool
pub struct Repositories {
    pub stores: StoreRepository,
    pub staff: StaffRepository,
    pub customers: CustomerRepository,
    pub categories: CategoryRepository,
    pub films: FilmRepository,
    pub actors: ActorRepository,
    pub inventory: InventoryRepository,
    pub rentals: RentalRepository,
    pub payments: PaymentRepository,
}

impl Repositories {
    /// Construct all repositories over the given pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        let factory = RepositoryFactory::new(pool);
        Self {
            stores: factory.create_store_repository(),
            staff: factory.create_staff_repository(),
            customers: factory.create_customer_repository(),
            categories: factory.create_category_repository(),
            films: factory.create_film_repository(),
            actors: factory.create_actor_repository(),
            inventory: factory.create_inventory_repository(),
            rentals: factory.create_rental_repository(),
            payments: factory.create_payment_repository(),
        }
    }
}
