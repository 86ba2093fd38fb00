use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub meeting_room_id: i32,
    pub user_id: i32,
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
}

/// Reservation as listed for its own owner, without the redundant owner id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MyReservationDto {
    pub id: i32,
    pub meeting_room_id: i32,
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateReservationDto {
    pub meeting_room_id: i32,
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateReservationDto {
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
}
