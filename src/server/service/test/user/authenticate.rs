use super::*;

/// Tests logging in with a wrong password and with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);
    service.register("ann@example.com", "s3cret").await?;

    let wrong_password = service.authenticate("ann@example.com", "nope").await;
    let unknown_email = service.authenticate("bob@example.com", "s3cret").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that accounts without a usable password cannot log in.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unusable_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = UserService::new(db).authenticate(&user.email, "").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a deactivated account cannot log in even with the right password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hash = hash_password("s3cret")?;
    let user = factory::user::UserFactory::new(db)
        .hashed_password(hash)
        .active(false)
        .build()
        .await?;

    let result = UserService::new(db).authenticate(&user.email, "s3cret").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
