use super::*;

/// Tests fetching a user together with the stored hash.
///
/// Expected: Ok(Some) with the factory hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_credentials_by_email(&created.email)
        .await?;

    let (user, hash) = found.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(hash, created.hashed_password);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_credentials_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
