//! Tests for the repository factory and the aggregate handle.

use crate::repositories::base::Repository;
use crate::repositories::factory::{Repositories, RepositoryFactory};
use crate::repositories::tests::{assertions, generators, setup_test_db};

#[tokio::test]
async fn test_factory_repositories_share_the_database() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let factory = RepositoryFactory::new(pool);

    // Execute: write through one repository instance, read through another
    let created = factory
        .create_store_repository()
        .create(&generators::store())
        .await?;
    let found = factory
        .create_store_repository()
        .find_by_id(created.store_id)
        .await?;

    // Verify
    assert_eq!(found.store_id, created.store_id);
    assert_eq!(found.store_name, created.store_name);
    Ok(())
}

#[tokio::test]
async fn test_repositories_aggregate_wiring() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repos = Repositories::new(pool);

    // Execute: touch every repository once
    let store = repos.stores.create(&generators::store()).await?;
    let staff = repos
        .staff
        .create(&generators::staff(store.store_id, "mike"))
        .await?;
    let customer = repos
        .customers
        .create(&generators::customer(store.store_id, "mary@dvdstore.test"))
        .await?;
    let category = repos.categories.create(&generators::category("Action")).await?;
    let film = repos
        .films
        .create(&generators::film("Heat", category.category_id))
        .await?;
    let actor = repos
        .actors
        .create(&generators::actor("Robert", "De Niro"))
        .await?;
    let copy = repos
        .inventory
        .create(&generators::inventory(film.film_id, store.store_id))
        .await?;
    let rental = repos
        .rentals
        .create(&generators::rental(
            copy.inventory_id,
            customer.customer_id,
            staff.staff_id,
        ))
        .await?;
    let payment = repos
        .payments
        .create(&generators::payment(
            customer.customer_id,
            staff.staff_id,
            rental.rental_id,
            2.50,
        ))
        .await?;

    // Verify
    assertions::assert_exists(&repos.stores, store.store_id).await?;
    assertions::assert_exists(&repos.staff, staff.staff_id).await?;
    assertions::assert_exists(&repos.customers, customer.customer_id).await?;
    assertions::assert_exists(&repos.categories, category.category_id).await?;
    assertions::assert_exists(&repos.films, film.film_id).await?;
    assertions::assert_exists(&repos.actors, actor.actor_id).await?;
    assertions::assert_exists(&repos.inventory, copy.inventory_id).await?;
    assertions::assert_exists(&repos.rentals, rental.rental_id).await?;
    assertions::assert_exists(&repos.payments, payment.payment_id).await?;
    Ok(())
}
