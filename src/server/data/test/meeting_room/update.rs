use super::*;

/// Tests that omitted fields keep their stored values.
///
/// Expected: Ok with only the description changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let room = factory::meeting_room::MeetingRoomFactory::new(db)
        .name("Orion")
        .build()
        .await?;

    let updated = MeetingRoomRepository::new(db)
        .update(
            room.id,
            UpdateMeetingRoomParam {
                name: None,
                description: Some(Some("Has a projector".to_string())),
            },
        )
        .await?;

    assert_eq!(updated.name, "Orion");
    assert_eq!(updated.description.as_deref(), Some("Has a projector"));

    Ok(())
}

/// Tests clearing the description with an explicit null.
///
/// Expected: Ok with the description removed
#[tokio::test]
async fn clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let room = factory::meeting_room::MeetingRoomFactory::new(db)
        .description(Some("Old".to_string()))
        .build()
        .await?;

    let updated = MeetingRoomRepository::new(db)
        .update(
            room.id,
            UpdateMeetingRoomParam {
                name: None,
                description: Some(None),
            },
        )
        .await?;

    assert!(updated.description.is_none());

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MeetingRoomRepository::new(db)
        .update(
            999999,
            UpdateMeetingRoomParam {
                name: Some("Ghost".to_string()),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
