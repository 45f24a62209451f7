use crate::{
    model::developer::DeveloperRole,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

/// Expected: Err(UserNotInSession) for an anonymous session
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Expected: Err(UserNotInDatabase) when the session user no longer exists
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(55).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(55)))
    ));

    Ok(())
}

/// Expected: Ok with no role for a regular user
#[tokio::test]
async fn allows_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "10").await?;
    AuthSession::new(session).set_user_id(10).await?;

    let current = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(current.user.discord_id, 10);
    assert!(current.role.is_none());

    Ok(())
}

/// Expected: Err(AccessDenied) for a regular user on a developer endpoint
#[tokio::test]
async fn developer_permission_denies_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "10").await?;
    AuthSession::new(session).set_user_id(10).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Developer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(10, _)))
    ));

    Ok(())
}

/// Expected: developer passes `Developer` but not `Owner`
#[tokio::test]
async fn developer_is_not_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "20").await?;
    factory::create_developer(db, "20").await?;
    AuthSession::new(session).set_user_id(20).await?;

    let guard = AuthGuard::new(db, session);
    let current = guard.require(&[Permission::Developer]).await?;
    assert_eq!(current.role, Some(DeveloperRole::Developer));

    let result = guard.require(&[Permission::Owner]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(20, _)))
    ));

    Ok(())
}

/// Expected: owner passes both permissions
#[tokio::test]
async fn owner_passes_everything() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "30").await?;
    factory::create_owner(db, "30").await?;
    AuthSession::new(session).set_user_id(30).await?;

    let current = AuthGuard::new(db, session)
        .require(&[Permission::Developer, Permission::Owner])
        .await?;

    assert!(current.is_owner());

    Ok(())
}
