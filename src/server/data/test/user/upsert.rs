use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with user created and no profile settings
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "alice".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "alice");
    assert!(user.display_name.is_none());
    assert!(user.avatar.is_none());

    Ok(())
}

/// Tests that logging in again refreshes the username but keeps profile settings.
///
/// Expected: Ok with name updated, display name and avatar preserved
#[tokio::test]
async fn relogin_preserves_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("old-name")
        .display_name("DJ Alice")
        .avatar("data:image/jpeg;base64,AAAA")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "new-name".to_string(),
        })
        .await?;

    assert_eq!(user.name, "new-name");
    assert_eq!(user.display_name.as_deref(), Some("DJ Alice"));
    assert_eq!(user.avatar.as_deref(), Some("data:image/jpeg;base64,AAAA"));

    Ok(())
}
