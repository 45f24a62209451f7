use super::*;

/// Expected: Ok(true) on the first delete, Ok(false) on the second
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::DeveloperAccount)
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    factory::create_developer(db, "300").await?;

    let repo = DeveloperRepository::new(db);

    assert!(repo.delete(300).await?);
    assert!(!repo.delete(300).await?);
    assert!(repo.find_by_discord_id(300).await?.is_none());

    Ok(())
}
