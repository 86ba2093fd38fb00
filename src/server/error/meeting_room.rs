use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MeetingRoomError {
    /// No meeting room exists with the given ID. Results in 404 Not Found.
    #[error("Meeting room {0} not found")]
    NotFound(i32),

    /// Another room already uses this name. Results in 422 Unprocessable Entity.
    #[error("A meeting room named '{0}' already exists")]
    DuplicateName(String),

    /// Name is empty, too long, or explicitly null on update.
    #[error("Invalid meeting room name: {0}")]
    InvalidName(String),
}

impl IntoResponse for MeetingRoomError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateName(_) | Self::InvalidName(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
