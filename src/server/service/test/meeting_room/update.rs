use super::*;

/// Tests renaming a room to a name another room already uses.
///
/// Expected: Err(MeetingRoomError::DuplicateName)
#[tokio::test]
async fn rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::meeting_room::MeetingRoomFactory::new(db)
        .name("Orion")
        .build()
        .await?;
    let room = factory::meeting_room::MeetingRoomFactory::new(db)
        .name("Lyra")
        .build()
        .await?;

    let result = MeetingRoomService::new(db)
        .update(
            room.id,
            UpdateMeetingRoomParam {
                name: Some("Orion".to_string()),
                description: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::MeetingRoomErr(MeetingRoomError::DuplicateName(_)))
    ));

    Ok(())
}

/// Tests that submitting the room's own current name is accepted.
///
/// Expected: Ok with the description updated
#[tokio::test]
async fn allows_keeping_own_name() -> Result<(), AppError> {
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

    let updated = MeetingRoomService::new(db)
        .update(
            room.id,
            UpdateMeetingRoomParam {
                name: Some("Orion".to_string()),
                description: Some(Some("Whiteboard".to_string())),
            },
        )
        .await?;

    assert_eq!(updated.name, "Orion");
    assert_eq!(updated.description.as_deref(), Some("Whiteboard"));

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Err(MeetingRoomError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MeetingRoomService::new(db)
        .update(999999, UpdateMeetingRoomParam::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::MeetingRoomErr(MeetingRoomError::NotFound(999999)))
    ));

    Ok(())
}
