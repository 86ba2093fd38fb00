//! Meeting room data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::meeting_room::{
    CreateMeetingRoomParam, MeetingRoom, UpdateMeetingRoomParam,
};

/// Repository providing database operations for meeting rooms.
pub struct MeetingRoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeetingRoomRepository<'a, C> {
    /// Creates a new MeetingRoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new meeting room.
    ///
    /// # Returns
    /// - `Ok(MeetingRoom)` - The created room
    /// - `Err(DbErr)` - Database error, including unique violations on `name`
    pub async fn create(&self, param: CreateMeetingRoomParam) -> Result<MeetingRoom, DbErr> {
        let entity = entity::meeting_room::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MeetingRoom::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MeetingRoom>, DbErr> {
        let entity = entity::prelude::MeetingRoom::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MeetingRoom::from_entity))
    }

    /// Finds the ID of the room with exactly this name.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - A room uses the name
    /// - `Ok(None)` - The name is free
    /// - `Err(DbErr)` - Database error
    pub async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::MeetingRoom::find()
            .filter(entity::meeting_room::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(|room| room.id))
    }

    pub async fn get_all(&self) -> Result<Vec<MeetingRoom>, DbErr> {
        let rooms = entity::prelude::MeetingRoom::find()
            .order_by_asc(entity::meeting_room::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MeetingRoom::from_entity)
            .collect();

        Ok(rooms)
    }

    /// Applies a partial update to a meeting room.
    ///
    /// # Returns
    /// - `Ok(MeetingRoom)` - The updated room
    /// - `Err(DbErr::RecordNotFound)` - No room with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMeetingRoomParam,
    ) -> Result<MeetingRoom, DbErr> {
        let room = entity::prelude::MeetingRoom::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Meeting room {} not found", id)))?;

        let mut active_model: entity::meeting_room::ActiveModel = room.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }

        let updated = active_model.update(self.db).await?;

        Ok(MeetingRoom::from_entity(updated))
    }

    /// Deletes a meeting room; its reservations go with it through the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rooms deleted (0 or 1)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MeetingRoom::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
