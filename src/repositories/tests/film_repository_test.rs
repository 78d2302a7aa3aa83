//! Tests for the film repository, including the film/actor association
//! table it maintains.

use crate::repositories::actor_repository::ActorRepository;
use crate::repositories::base::Repository;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::film_repository::FilmRepository;
use crate::repositories::tests::{assertions, generators, setup_test_db};

#[tokio::test]
async fn test_films_are_grouped_by_category() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let categories = CategoryRepository::new(pool.clone());
    let repo = FilmRepository::new(pool);
    let action = categories.create(&generators::category("Action")).await?;
    let drama = categories.create(&generators::category("Drama")).await?;
    let heat = repo.create(&generators::film("Heat", action.category_id)).await?;
    repo.create(&generators::film("Casablanca", drama.category_id))
        .await?;

    // Execute
    let action_films = repo.find_by_category(action.category_id).await?;

    // Verify
    assert_eq!(assertions::ids(&action_films), vec![heat.film_id]);
    Ok(())
}

#[tokio::test]
async fn test_find_by_title_matches_substring() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = FilmRepository::new(pool);
    let heat = repo.create(&generators::film("Heat", 1)).await?;
    repo.create(&generators::film("Casablanca", 1)).await?;

    // Execute
    let matches = repo.find_by_title("eat").await?;

    // Verify
    assert_eq!(assertions::ids(&matches), vec![heat.film_id]);
    assert!(repo.find_by_title("Alien").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_find_by_release_year() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = FilmRepository::new(pool);
    let heat = repo.create(&generators::film("Heat", 1)).await?;
    let mut older = generators::film("Casablanca", 1);
    older.release_year = 1942;
    repo.create(&older).await?;

    // Execute
    let from_1995 = repo.find_by_release_year(1995).await?;

    // Verify
    assert_eq!(assertions::ids(&from_1995), vec![heat.film_id]);
    Ok(())
}

#[tokio::test]
async fn test_actor_links_drive_find_by_actor() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let actors = ActorRepository::new(pool.clone());
    let repo = FilmRepository::new(pool);
    let heat = repo.create(&generators::film("Heat", 1)).await?;
    let ronin = repo.create(&generators::film("Ronin", 1)).await?;
    let deniro = actors.create(&generators::actor("Robert", "De Niro")).await?;

    // Execute
    repo.add_actor(heat.film_id, deniro.actor_id).await?;
    repo.add_actor(ronin.film_id, deniro.actor_id).await?;
    let filmography = repo.find_by_actor(deniro.actor_id).await?;

    // Verify
    let found = assertions::ids(&filmography);
    assert_eq!(found.len(), 2);
    assert!(found.contains(&heat.film_id));
    assert!(found.contains(&ronin.film_id));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_actor_link_is_constraint_violation() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = FilmRepository::new(pool);
    let heat = repo.create(&generators::film("Heat", 1)).await?;
    repo.add_actor(heat.film_id, 7).await?;

    // Execute
    let result = repo.add_actor(heat.film_id, 7).await;

    // Verify
    assertions::assert_constraint_violation(result);
    Ok(())
}

#[tokio::test]
async fn test_remove_actor_link() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = FilmRepository::new(pool);
    let heat = repo.create(&generators::film("Heat", 1)).await?;
    repo.add_actor(heat.film_id, 7).await?;

    // Execute
    repo.remove_actor(heat.film_id, 7).await?;

    // Verify
    assert!(repo.find_by_actor(7).await?.is_empty());
    assertions::assert_not_found(repo.remove_actor(heat.film_id, 7).await);
    Ok(())
}
