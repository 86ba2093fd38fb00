use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{meeting_room::MeetingRoomRepository, reservation::ReservationRepository},
    error::{is_unique_violation, meeting_room::MeetingRoomError, AppError},
    model::{
        meeting_room::{
            validate_name, CreateMeetingRoomParam, MeetingRoom, UpdateMeetingRoomParam,
        },
        reservation::Reservation,
    },
};

pub struct MeetingRoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingRoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meeting room with a unique, valid name.
    ///
    /// # Returns
    /// - `Ok(MeetingRoom)`: The created room
    /// - `Err(MeetingRoomError::InvalidName)`: Empty or too long name
    /// - `Err(MeetingRoomError::DuplicateName)`: Name already used
    pub async fn create(&self, param: CreateMeetingRoomParam) -> Result<MeetingRoom, AppError> {
        let repo = MeetingRoomRepository::new(self.db);

        validate_name(&param.name)?;

        if repo.find_id_by_name(&param.name).await?.is_some() {
            return Err(MeetingRoomError::DuplicateName(param.name).into());
        }

        let name = param.name.clone();
        let room = repo.create(param).await.map_err(|err| {
            if is_unique_violation(&err) {
                MeetingRoomError::DuplicateName(name).into()
            } else {
                AppError::from(err)
            }
        })?;

        tracing::info!("Created meeting room {} ({})", room.id, room.name);

        Ok(room)
    }

    pub async fn get_all(&self) -> Result<Vec<MeetingRoom>, AppError> {
        let repo = MeetingRoomRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MeetingRoom, AppError> {
        let repo = MeetingRoomRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| MeetingRoomError::NotFound(id).into())
    }

    /// Applies a partial update.
    ///
    /// Keeping the current name is not a duplicate; taking another room's name is.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMeetingRoomParam,
    ) -> Result<MeetingRoom, AppError> {
        let repo = MeetingRoomRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(MeetingRoomError::NotFound(id).into());
        }

        if let Some(name) = &param.name {
            validate_name(name)?;

            if let Some(owner_id) = repo.find_id_by_name(name).await? {
                if owner_id != id {
                    return Err(MeetingRoomError::DuplicateName(name.clone()).into());
                }
            }
        }

        let name = param.name.clone();
        repo.update(id, param).await.map_err(|err| match name {
            Some(name) if is_unique_violation(&err) => {
                MeetingRoomError::DuplicateName(name).into()
            }
            _ => AppError::from(err),
        })
    }

    /// Deletes a room together with all of its reservations.
    ///
    /// # Returns
    /// - `Ok(MeetingRoom)`: The room as it was before deletion
    /// - `Err(MeetingRoomError::NotFound)`: No room with that ID
    pub async fn delete(&self, id: i32) -> Result<MeetingRoom, AppError> {
        let repo = MeetingRoomRepository::new(self.db);

        let Some(room) = repo.find_by_id(id).await? else {
            return Err(MeetingRoomError::NotFound(id).into());
        };

        repo.delete(id).await?;

        tracing::info!("Deleted meeting room {} ({})", room.id, room.name);

        Ok(room)
    }

    /// Gets the reservations of a room that have not finished yet.
    pub async fn get_reservations(&self, id: i32) -> Result<Vec<Reservation>, AppError> {
        let room_repo = MeetingRoomRepository::new(self.db);
        if room_repo.find_by_id(id).await?.is_none() {
            return Err(MeetingRoomError::NotFound(id).into());
        }

        let reservation_repo = ReservationRepository::new(self.db);

        Ok(reservation_repo
            .get_upcoming_by_room(id, Utc::now())
            .await?)
    }
}
