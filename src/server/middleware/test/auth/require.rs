use super::*;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests resolving a logged-in regular user with no permissions required.
///
/// Expected: Ok(User) for the session user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert!(!resolved.is_superuser);

    Ok(())
}

/// Tests that a regular user is denied a superuser-only operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_regular_user_superuser_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Superuser])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests that a superuser passes the superuser permission check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_superuser() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let admin = factory::create_superuser(db).await?;

    AuthSession::new(session).set_user_id(admin.id).await?;

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Superuser])
        .await?;

    assert!(resolved.is_superuser);

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(424242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(424242)))
    ));

    Ok(())
}

/// Tests that deactivated accounts are treated as logged out.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that logging out removes the user from the session.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn clear_logs_user_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
