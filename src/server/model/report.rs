//! Domain models for the reservation count export.

use crate::model::report::{ReportDto, RoomReservationCountDto};

/// Number of reservations of one meeting room within a report period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomReservationCount {
    pub meeting_room_id: i32,
    pub count: u64,
}

impl RoomReservationCount {
    pub fn into_dto(self) -> RoomReservationCountDto {
        RoomReservationCountDto {
            meeting_room_id: self.meeting_room_id,
            count: self.count,
        }
    }
}

/// Result of a completed spreadsheet export.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub spreadsheet_id: String,
    pub spreadsheet_url: String,
    pub counts: Vec<RoomReservationCount>,
}

impl ExportedReport {
    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            spreadsheet_id: self.spreadsheet_id,
            spreadsheet_url: self.spreadsheet_url,
            counts: self.counts.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}
