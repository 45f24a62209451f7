use super::*;

/// Expected: Ok(Some) for an existing user
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let created = factory::user::create_user_with_id(db, "42").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_discord_id(42).await?;

    assert_eq!(found.map(|u| u.name), Some(created.name));

    Ok(())
}

/// Expected: Ok(None) for an unknown ID
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_discord_id(42).await?.is_none());

    Ok(())
}
