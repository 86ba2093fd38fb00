//! Reservation factory for creating test reservation entities.
//!
//! Reservations are inserted as-is: no overlap or future-start validation happens here.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::hours_from_now;

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, room.id, user.id)
///     .range(hours_from_now(2), hours_from_now(3))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    meeting_room_id: i32,
    user_id: i32,
    from_reserve: DateTime<Utc>,
    to_reserve: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - from_reserve: start of the hour 24 hours from now
    /// - to_reserve: one hour after `from_reserve`
    pub fn new(db: &'a DatabaseConnection, meeting_room_id: i32, user_id: i32) -> Self {
        Self {
            db,
            meeting_room_id,
            user_id,
            from_reserve: hours_from_now(24),
            to_reserve: hours_from_now(25),
        }
    }

    /// Sets both ends of the reserved range.
    pub fn range(mut self, from_reserve: DateTime<Utc>, to_reserve: DateTime<Utc>) -> Self {
        self.from_reserve = from_reserve;
        self.to_reserve = to_reserve;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            meeting_room_id: ActiveValue::Set(self.meeting_room_id),
            user_id: ActiveValue::Set(self.user_id),
            from_reserve: ActiveValue::Set(self.from_reserve),
            to_reserve: ActiveValue::Set(self.to_reserve),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with the default range.
pub async fn create_reservation(
    db: &DatabaseConnection,
    meeting_room_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, meeting_room_id, user_id)
        .build()
        .await
}

/// Creates a reservation over the given range.
pub async fn create_reservation_at(
    db: &DatabaseConnection,
    meeting_room_id: i32,
    user_id: i32,
    from_reserve: DateTime<Utc>,
    to_reserve: DateTime<Utc>,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, meeting_room_id, user_id)
        .range(from_reserve, to_reserve)
        .build()
        .await
}
