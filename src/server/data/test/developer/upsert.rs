use super::*;

/// Expected: Ok with developer created and `added_by` recorded
#[tokio::test]
async fn creates_developer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::DeveloperAccount)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = DeveloperRepository::new(db);
    let account = repo
        .upsert(CreateDeveloperParam {
            discord_id: 200,
            name: "bob".to_string(),
            role: DeveloperRole::Developer,
            added_by: Some(100),
        })
        .await?;

    assert_eq!(account.discord_id, 200);
    assert_eq!(account.role, DeveloperRole::Developer);
    assert_eq!(account.added_by, Some(100));

    Ok(())
}

/// Tests promoting an existing developer to owner through the bootstrap flow.
///
/// Expected: Ok with a single row whose role is owner and original `added_by` kept
#[tokio::test]
async fn promotes_existing_developer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::DeveloperAccount)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::developer_account::DeveloperAccountFactory::new(db)
        .discord_id("200")
        .added_by("100")
        .build()
        .await?;

    let repo = DeveloperRepository::new(db);
    let account = repo
        .upsert(CreateDeveloperParam {
            discord_id: 200,
            name: "bob".to_string(),
            role: DeveloperRole::Owner,
            added_by: None,
        })
        .await?;

    assert_eq!(account.role, DeveloperRole::Owner);
    assert_eq!(account.added_by, Some(100));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
