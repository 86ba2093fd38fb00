//! Domain models for reservations and the time ranges they occupy.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{
        CreateReservationDto, MyReservationDto, ReservationDto, UpdateReservationDto,
    },
    server::error::reservation::ReservationError,
};

/// Half-open time range `[start, end)`.
///
/// Construction guarantees `start < end`. Two ranges that merely touch, where one
/// ends exactly when the other begins, do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range after checking that `start` comes strictly before `end`.
    ///
    /// # Returns
    /// - `Ok(TimeRange)` - Valid non-empty range
    /// - `Err(ReservationError::EndNotAfterStart)` - `end <= start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ReservationError> {
        if start >= end {
            return Err(ReservationError::EndNotAfterStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns true if the two ranges share any instant.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Builds a range for a new booking, which must start strictly after `now`.
    ///
    /// The start is checked before the ordering of the two ends.
    ///
    /// # Returns
    /// - `Ok(TimeRange)` - Valid upcoming range
    /// - `Err(ReservationError::StartNotInFuture)` - `start <= now`
    /// - `Err(ReservationError::EndNotAfterStart)` - `start >= end`
    pub fn upcoming(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ReservationError> {
        if start <= now {
            return Err(ReservationError::StartNotInFuture);
        }
        Self::new(start, end)
    }
}

/// A booked time range of a meeting room, owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub meeting_room_id: i32,
    pub user_id: i32,
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            meeting_room_id: entity.meeting_room_id,
            user_id: entity.user_id,
            from_reserve: entity.from_reserve,
            to_reserve: entity.to_reserve,
        }
    }

    /// The occupied range, `None` only for rows written around the store's validation.
    pub fn range(&self) -> Option<TimeRange> {
        TimeRange::new(self.from_reserve, self.to_reserve).ok()
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            meeting_room_id: self.meeting_room_id,
            user_id: self.user_id,
            from_reserve: self.from_reserve,
            to_reserve: self.to_reserve,
        }
    }

    pub fn into_my_dto(self) -> MyReservationDto {
        MyReservationDto {
            id: self.id,
            meeting_room_id: self.meeting_room_id,
            from_reserve: self.from_reserve,
            to_reserve: self.to_reserve,
        }
    }
}

/// Parameters for creating a reservation on behalf of `user_id`.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub meeting_room_id: i32,
    pub user_id: i32,
    pub range: TimeRange,
}

impl CreateReservationParam {
    /// Validates the requested range against `now` and binds it to the owner.
    pub fn from_dto(
        user_id: i32,
        dto: CreateReservationDto,
        now: DateTime<Utc>,
    ) -> Result<Self, ReservationError> {
        Ok(Self {
            meeting_room_id: dto.meeting_room_id,
            user_id,
            range: TimeRange::upcoming(dto.from_reserve, dto.to_reserve, now)?,
        })
    }
}

/// Parameters for moving an existing reservation to a new range.
///
/// The room and owner of a reservation never change.
#[derive(Debug, Clone)]
pub struct UpdateReservationParam {
    pub range: TimeRange,
}

impl UpdateReservationParam {
    pub fn from_dto(dto: UpdateReservationDto, now: DateTime<Utc>) -> Result<Self, ReservationError> {
        Ok(Self {
            range: TimeRange::upcoming(dto.from_reserve, dto.to_reserve, now)?,
        })
    }
}
