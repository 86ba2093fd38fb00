use super::*;

/// Tests re-submitting a reservation's own unchanged range.
///
/// Expected: Ok, the reservation does not conflict with itself
#[tokio::test]
async fn allows_own_unchanged_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let owner = User::from_entity(user);

    let updated = ReservationService::new(db)
        .update(
            &owner,
            reservation.id,
            UpdateReservationParam {
                range: TimeRange::new(reservation.from_reserve, reservation.to_reserve).unwrap(),
            },
        )
        .await?;

    assert_eq!(updated.from_reserve, reservation.from_reserve);

    Ok(())
}

/// Tests extending a reservation into the next one.
///
/// Expected: Err(ReservationError::Conflict) listing only the other reservation
#[tokio::test]
async fn rejects_overlap_with_other_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let room = factory::create_meeting_room(db).await?;
    let ten = hours_from_now(48);
    let first =
        factory::create_reservation_at(db, room.id, user.id, ten, ten + Duration::hours(1))
            .await?;
    let second = factory::create_reservation_at(
        db,
        room.id,
        user.id,
        ten + Duration::hours(1),
        ten + Duration::hours(2),
    )
    .await?;

    let result = ReservationService::new(db)
        .update(
            &User::from_entity(user),
            first.id,
            UpdateReservationParam {
                range: TimeRange::new(ten, ten + Duration::minutes(90)).unwrap(),
            },
        )
        .await;

    match result {
        Err(AppError::ReservationErr(ReservationError::Conflict(conflicts))) => {
            let ids: Vec<i32> = conflicts.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![second.id]);
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests a regular user updating someone else's reservation.
///
/// Expected: Err(AuthError::AccessDenied)
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

    let result = ReservationService::new(db)
        .update(
            &stranger,
            reservation.id,
            UpdateReservationParam {
                range: TimeRange::new(hours_from_now(30), hours_from_now(31)).unwrap(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a superuser moving another user's reservation.
///
/// Expected: Ok with the new range
#[tokio::test]
async fn allows_superuser() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let admin = User::from_entity(factory::create_superuser(db).await?);

    let range = TimeRange::new(hours_from_now(30), hours_from_now(31)).unwrap();
    let updated = ReservationService::new(db)
        .update(&admin, reservation.id, UpdateReservationParam { range })
        .await?;

    assert_eq!(updated.from_reserve, range.start());
    assert_eq!(updated.user_id, owner.id);

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Err(ReservationError::ReservationNotFound)
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = User::from_entity(factory::create_superuser(db).await?);

    let result = ReservationService::new(db)
        .update(
            &admin,
            999999,
            UpdateReservationParam {
                range: TimeRange::new(hours_from_now(2), hours_from_now(3)).unwrap(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(
            ReservationError::ReservationNotFound(999999)
        ))
    ));

    Ok(())
}
