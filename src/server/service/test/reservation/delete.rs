use super::*;

/// Tests the owner deleting their reservation.
///
/// Expected: Ok with the deleted reservation returned
#[tokio::test]
async fn owner_deletes_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let deleted = service
        .delete(&User::from_entity(owner), reservation.id)
        .await?;

    assert_eq!(deleted.id, reservation.id);
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests a regular user deleting someone else's reservation.
///
/// Expected: Err(AuthError::AccessDenied) and the reservation kept
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let stranger = User::from_entity(factory::create_user(db).await?);

    let service = ReservationService::new(db);
    let result = service.delete(&stranger, reservation.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests a superuser deleting another user's reservation.
///
/// Expected: Ok
#[tokio::test]
async fn superuser_deletes_any_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let admin = User::from_entity(factory::create_superuser(db).await?);

    let result = ReservationService::new(db).delete(&admin, reservation.id).await;

    assert!(result.is_ok());

    Ok(())
}
