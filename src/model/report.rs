use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Period whose reservations are counted: those starting at or after `from`
/// and ending at or before `to`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReportDto {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomReservationCountDto {
    pub meeting_room_id: i32,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReportDto {
    pub spreadsheet_id: String,
    pub spreadsheet_url: String,
    pub counts: Vec<RoomReservationCountDto>,
}
