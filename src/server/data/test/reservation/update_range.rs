use super::*;

/// Tests moving a reservation to a new range.
///
/// Expected: Ok with the new range persisted
#[tokio::test]
async fn updates_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_user, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let range = TimeRange::new(hours_from_now(72), hours_from_now(74)).unwrap();
    let updated = ReservationRepository::new(db)
        .update_range(reservation.id, &range)
        .await?;

    assert_eq!(updated.id, reservation.id);
    assert_eq!(updated.from_reserve, range.start());
    assert_eq!(updated.to_reserve, range.end());

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.from_reserve, range.start());

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let range = TimeRange::new(hours_from_now(2), hours_from_now(3)).unwrap();
    let result = ReservationRepository::new(db)
        .update_range(999999, &range)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
