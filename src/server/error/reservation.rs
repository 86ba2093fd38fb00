use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ConflictErrorDto, ErrorDto},
    server::model::reservation::Reservation,
};

#[derive(Error, Debug)]
pub enum ReservationError {
    /// The referenced meeting room does not exist. Results in 404 Not Found.
    #[error("Meeting room {0} not found")]
    RoomNotFound(i32),

    /// The reservation being edited does not exist. Results in 404 Not Found.
    #[error("Reservation {0} not found")]
    ReservationNotFound(i32),

    /// Requested start lies at or before the current time.
    #[error("Reservation start must be in the future")]
    StartNotInFuture,

    /// Requested end does not come after the requested start.
    #[error("Reservation end must be after its start")]
    EndNotAfterStart,

    /// Requested range overlaps one or more existing reservations of the same room.
    ///
    /// Results in 422 Unprocessable Entity; the body lists every conflicting entry.
    #[error("Meeting room is already reserved: {}", format_conflicts(.0))]
    Conflict(Vec<Reservation>),
}

fn format_conflicts(conflicts: &[Reservation]) -> String {
    conflicts
        .iter()
        .map(|r| {
            format!(
                "{} to {}",
                r.from_reserve.format("%Y-%m-%d %H:%M UTC"),
                r.to_reserve.format("%Y-%m-%d %H:%M UTC")
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts reservation errors into HTTP responses.
///
/// - `RoomNotFound` / `ReservationNotFound` → 404 Not Found
/// - `StartNotInFuture` / `EndNotAfterStart` → 422 Unprocessable Entity
/// - `Conflict` → 422 Unprocessable Entity with a `ConflictErrorDto` body
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        match self {
            Self::RoomNotFound(_) | Self::ReservationNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::StartNotInFuture | Self::EndNotAfterStart => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Conflict(ref conflicts) => {
                let error = self.to_string();
                let conflicts = conflicts.iter().cloned().map(|r| r.into_dto()).collect();

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ConflictErrorDto { error, conflicts }),
                )
                    .into_response()
            }
        }
    }
}
