use super::*;

/// Expected: Ok with avatar stored, then removed
#[tokio::test]
async fn sets_and_clears_avatar() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::user::create_user_with_id(db, "7").await?;
    let repo = UserRepository::new(db);

    let avatar = "data:image/jpeg;base64,/9j/4AAQ".to_string();
    let user = repo.update_avatar(7, Some(avatar.clone())).await?.unwrap();
    assert_eq!(user.avatar, Some(avatar));

    let user = repo.update_avatar(7, None).await?.unwrap();
    assert!(user.avatar.is_none());

    Ok(())
}
