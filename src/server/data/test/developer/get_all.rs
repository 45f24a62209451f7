use super::*;

/// Expected: Ok with owners listed before developers, each group by name
#[tokio::test]
async fn lists_owners_first() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::DeveloperAccount)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::developer_account::DeveloperAccountFactory::new(db)
        .name("aaron")
        .build()
        .await?;
    factory::developer_account::DeveloperAccountFactory::new(db)
        .name("zoe")
        .role("owner")
        .build()
        .await?;
    factory::developer_account::DeveloperAccountFactory::new(db)
        .name("mia")
        .build()
        .await?;

    let repo = DeveloperRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|a| a.name).collect();

    assert_eq!(names, vec!["zoe", "aaron", "mia"]);

    Ok(())
}

/// Tests that a corrupt role string surfaces as an error instead of being guessed.
///
/// Expected: Err
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::DeveloperAccount)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::developer_account::DeveloperAccountFactory::new(db)
        .role("superuser")
        .build()
        .await?;

    let repo = DeveloperRepository::new(db);

    assert!(repo.get_all().await.is_err());

    Ok(())
}
