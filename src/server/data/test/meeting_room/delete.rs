use super::*;

/// Tests that deleting a room removes its reservations too.
///
/// Expected: Ok(1) with no reservations left for the room
#[tokio::test]
async fn cascades_to_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_user, room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let deleted = MeetingRoomRepository::new(db).delete(room.id).await?;

    assert_eq!(deleted, 1);
    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a room that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = MeetingRoomRepository::new(db).delete(999999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
