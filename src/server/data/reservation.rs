//! Reservation data repository for database operations.
//!
//! Provides the `ReservationRepository`, including the overlap query that backs
//! reservation validation. The repository is generic over the SeaORM connection so the
//! same queries run on the pool or inside the transaction that guards a write.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    report::RoomReservationCount,
    reservation::{CreateReservationParam, Reservation, TimeRange},
};

/// Row shape of the per-room aggregate query.
#[derive(Debug, FromQueryResult)]
struct RoomCountRow {
    meeting_room_id: i32,
    count: i64,
}

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation without any validation.
    ///
    /// Callers are expected to have run `find_conflicts` on the same connection first.
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The created reservation
    /// - `Err(DbErr)`: Database error, including foreign key violations for unknown
    ///   rooms or users
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            meeting_room_id: ActiveValue::Set(param.meeting_room_id),
            user_id: ActiveValue::Set(param.user_id),
            from_reserve: ActiveValue::Set(param.range.start()),
            to_reserve: ActiveValue::Set(param.range.end()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Finds reservations of a room whose range intersects `range`.
    ///
    /// Uses strict inequalities on both ends, so a reservation ending exactly when
    /// `range` starts (or starting exactly when it ends) is not returned.
    ///
    /// # Arguments
    /// - `meeting_room_id`: Room to search
    /// - `range`: Candidate range
    /// - `exclude_id`: Reservation to leave out, used when re-validating an update
    ///
    /// # Returns
    /// - `Ok(reservations)`: Conflicting reservations ordered by start, empty if none
    /// - `Err(DbErr)`: Database error
    pub async fn find_conflicts(
        &self,
        meeting_room_id: i32,
        range: &TimeRange,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::MeetingRoomId.eq(meeting_room_id))
            .filter(entity::reservation::Column::FromReserve.lt(range.end()))
            .filter(entity::reservation::Column::ToReserve.gt(range.start()));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        // Rows without a valid range still block the slot once the SQL bounds match.
        let conflicts = query
            .order_by_asc(entity::reservation::Column::FromReserve)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .filter(|r| r.range().is_none_or(|existing| existing.overlaps(range)))
            .collect();

        Ok(conflicts)
    }

    /// Moves a reservation to a new range.
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The updated reservation
    /// - `Err(DbErr::RecordNotFound)`: No reservation with that ID
    /// - `Err(DbErr)`: Other database error
    pub async fn update_range(&self, id: i32, range: &TimeRange) -> Result<Reservation, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Reservation {} not found", id)))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.from_reserve = ActiveValue::Set(range.start());
        active_model.to_reserve = ActiveValue::Set(range.end());

        let updated = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect();

        Ok(reservations)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::FromReserve)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect();

        Ok(reservations)
    }

    /// Gets reservations of a room that have not finished yet (`to_reserve >= now`).
    pub async fn get_upcoming_by_room(
        &self,
        meeting_room_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::MeetingRoomId.eq(meeting_room_id))
            .filter(entity::reservation::Column::ToReserve.gte(now))
            .order_by_asc(entity::reservation::Column::FromReserve)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect();

        Ok(reservations)
    }

    /// Counts reservations per room that lie entirely within `[from, to]`.
    ///
    /// Rooms without such reservations are absent from the result.
    ///
    /// # Returns
    /// - `Ok(counts)`: One entry per room, ordered by room ID
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_room(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<RoomReservationCount>, DbErr> {
        let rows = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::MeetingRoomId)
            .column_as(entity::reservation::Column::Id.count(), "count")
            .filter(entity::reservation::Column::FromReserve.gte(from))
            .filter(entity::reservation::Column::ToReserve.lte(to))
            .group_by(entity::reservation::Column::MeetingRoomId)
            .order_by_asc(entity::reservation::Column::MeetingRoomId)
            .into_model::<RoomCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| RoomReservationCount {
                meeting_room_id: row.meeting_room_id,
                count: u64::try_from(row.count).unwrap_or(0),
            })
            .collect())
    }
}
