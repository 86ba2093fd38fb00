//! Domain models for meeting rooms.

use crate::{
    model::meeting_room::{CreateMeetingRoomDto, MeetingRoomDto, UpdateMeetingRoomDto},
    server::error::meeting_room::MeetingRoomError,
};

/// Upper bound on room name length, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Checks that a room name has between 1 and `MAX_NAME_LEN` characters.
pub fn validate_name(name: &str) -> Result<(), MeetingRoomError> {
    if name.is_empty() {
        return Err(MeetingRoomError::InvalidName(
            "name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(MeetingRoomError::InvalidName(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRoom {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl MeetingRoom {
    /// Converts an entity model to a meeting room domain model at the repository boundary.
    pub fn from_entity(entity: entity::meeting_room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> MeetingRoomDto {
        MeetingRoomDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMeetingRoomParam {
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateMeetingRoomDto> for CreateMeetingRoomParam {
    fn from(dto: CreateMeetingRoomDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Parameters for a partial meeting room update.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateMeetingRoomParam {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateMeetingRoomParam {
    /// Converts the patch body, rejecting an explicit `null` name.
    pub fn from_dto(dto: UpdateMeetingRoomDto) -> Result<Self, MeetingRoomError> {
        let name = match dto.name {
            Some(None) => {
                return Err(MeetingRoomError::InvalidName(
                    "name cannot be null".to_string(),
                ))
            }
            Some(Some(name)) => Some(name),
            None => None,
        };

        Ok(Self {
            name,
            description: dto.description,
        })
    }
}
