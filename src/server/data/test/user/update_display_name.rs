use super::*;

/// Expected: Ok with display name set, then cleared
#[tokio::test]
async fn sets_and_clears_display_name() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::user::create_user_with_id(db, "7").await?;
    let repo = UserRepository::new(db);

    let user = repo
        .update_display_name(7, Some("Night Owl".to_string()))
        .await?
        .unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Night Owl"));
    assert_eq!(user.shown_name(), "Night Owl");

    let user = repo.update_display_name(7, None).await?.unwrap();
    assert!(user.display_name.is_none());

    Ok(())
}

/// Expected: Ok(None) when the user does not exist
#[tokio::test]
async fn unknown_user_is_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_display_name(7, Some("Ghost".to_string()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
