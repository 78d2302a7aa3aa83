//! Tests for the category repository.

use crate::repositories::base::Repository;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::tests::{assertions, generators, setup_test_db};

#[tokio::test]
async fn test_create_and_find_by_name() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = CategoryRepository::new(pool);
    let action = repo.create(&generators::category("Action")).await?;
    repo.create(&generators::category("Animation")).await?;
    repo.create(&generators::category("Drama")).await?;

    // Execute
    let matches = repo.find_by_name("Action").await?;

    // Verify
    assert_eq!(assertions::ids(&matches), vec![action.category_id]);
    assertions::assert_count(&repo, 3).await?;
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_is_constraint_violation() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = CategoryRepository::new(pool);
    repo.create(&generators::category("Action")).await?;

    // Execute
    let result = repo.create(&generators::category("Action")).await;

    // Verify
    assertions::assert_constraint_violation(result);
    assertions::assert_count(&repo, 1).await?;
    Ok(())
}

#[tokio::test]
async fn test_deleted_category_is_not_matched_by_name() -> crate::error::Result<()> {
    // Setup
    let pool = setup_test_db().await;
    let repo = CategoryRepository::new(pool);
    let action = repo.create(&generators::category("Action")).await?;
    repo.delete(&action).await?;

    // Execute
    let matches = repo.find_by_name("Action").await?;

    // Verify
    assert!(matches.is_empty());
    Ok(())
}
