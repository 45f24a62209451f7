use super::*;

/// Expected: false with only developers, true once an owner exists
#[tokio::test]
async fn detects_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::DeveloperAccount)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = DeveloperRepository::new(db);
    assert!(!repo.owner_exists().await?);

    factory::create_developer(db, "1").await?;
    assert!(!repo.owner_exists().await?);

    factory::create_owner(db, "2").await?;
    assert!(repo.owner_exists().await?);

    Ok(())
}
