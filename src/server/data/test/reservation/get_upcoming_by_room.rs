use super::*;

/// Tests that finished reservations are left out while running ones are kept.
///
/// Expected: Ok with the running and future reservations, ordered by start
#[tokio::test]
async fn excludes_finished_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;

    factory::create_reservation_at(db, room.id, user.id, hours_from_now(-5), hours_from_now(-4))
        .await?;
    let running =
        factory::create_reservation_at(db, room.id, user.id, hours_from_now(-1), hours_from_now(2))
            .await?;
    let future =
        factory::create_reservation_at(db, room.id, user.id, hours_from_now(5), hours_from_now(6))
            .await?;

    let result = ReservationRepository::new(db)
        .get_upcoming_by_room(room.id, Utc::now())
        .await?;

    let ids: Vec<i32> = result.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![running.id, future.id]);

    Ok(())
}
