//! Repository pattern implementation for data access
//!
//! This module provides a clean separation of concerns for data access operations
//! by implementing the repository pattern. Each entity has its own repository
//! that encapsulates database access logic.

pub mod actor_repository;
pub mod base;
pub mod category_repository;
pub mod customer_repository;
pub mod factory;
pub mod film_repository;
pub mod inventory_repository;
pub mod payment_repository;
pub mod rental_repository;
pub mod staff_repository;
pub mod store_repository;

#[cfg(test)]
pub mod tests;

// Re-export repositories and factory for easier access
pub use actor_repository::ActorRepository;
pub use base::{BaseRepository, Repository};
pub use category_repository::CategoryRepository;
pub use customer_repository::CustomerRepository;
pub use factory::{Repositories, RepositoryFactory};
pub use film_repository::FilmRepository;
pub use inventory_repository::InventoryRepository;
pub use payment_repository::PaymentRepository;
pub use rental_repository::RentalRepository;
pub use staff_repository::StaffRepository;
pub use store_repository::StoreRepository;
