//! Meeting room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test meeting rooms with customizable fields.
pub struct MeetingRoomFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> MeetingRoomFactory<'a> {
    /// Creates a new MeetingRoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Room {}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the meeting room entity into the database.
    pub async fn build(self) -> Result<entity::meeting_room::Model, DbErr> {
        entity::meeting_room::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a meeting room with default values.
pub async fn create_meeting_room(
    db: &DatabaseConnection,
) -> Result<entity::meeting_room::Model, DbErr> {
    MeetingRoomFactory::new(db).build().await
}
