use super::*;

/// Tests deleting a reservation by ID.
///
/// Expected: Ok with the reservation removed
#[tokio::test]
async fn deletes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_user, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    ReservationRepository::new(db).delete(reservation.id).await?;

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}
