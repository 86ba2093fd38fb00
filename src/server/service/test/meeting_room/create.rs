use super::*;

/// Tests creating a room with a fresh name.
///
/// Expected: Ok with the room returned
#[tokio::test]
async fn creates_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = MeetingRoomService::new(db)
        .create(CreateMeetingRoomParam {
            name: "Orion".to_string(),
            description: None,
        })
        .await?;

    assert_eq!(room.name, "Orion");

    Ok(())
}

/// Tests that a second room with the same name is rejected.
///
/// Expected: Err(MeetingRoomError::DuplicateName)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
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

    let result = MeetingRoomService::new(db)
        .create(CreateMeetingRoomParam {
            name: "Orion".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::MeetingRoomErr(MeetingRoomError::DuplicateName(_)))
    ));

    Ok(())
}

/// Tests that an empty name is rejected before touching the database.
///
/// Expected: Err(MeetingRoomError::InvalidName)
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MeetingRoomService::new(db)
        .create(CreateMeetingRoomParam {
            name: String::new(),
            description: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::MeetingRoomErr(MeetingRoomError::InvalidName(_)))
    ));

    Ok(())
}
