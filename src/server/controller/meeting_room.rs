use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        meeting_room::{CreateMeetingRoomDto, MeetingRoomDto, UpdateMeetingRoomDto},
        reservation::ReservationDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::meeting_room::{CreateMeetingRoomParam, UpdateMeetingRoomParam},
        service::meeting_room::MeetingRoomService,
        state::AppState,
    },
};

/// Tag for grouping meeting room endpoints in OpenAPI documentation
pub static MEETING_ROOM_TAG: &str = "meeting_room";

/// Create a meeting room.
///
/// # Access Control
/// - `Superuser` - Only superusers can create rooms
///
/// # Returns
/// - `201 Created` - Room created
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
/// - `422 Unprocessable Entity` - Invalid or duplicate name
#[utoipa::path(
    post,
    path = "/api/meeting_rooms",
    tag = MEETING_ROOM_TAG,
    request_body = CreateMeetingRoomDto,
    responses(
        (status = 201, description = "Meeting room created", body = MeetingRoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a superuser", body = ErrorDto),
        (status = 422, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_meeting_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMeetingRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let room = MeetingRoomService::new(&state.db)
        .create(CreateMeetingRoomParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// List all meeting rooms.
#[utoipa::path(
    get,
    path = "/api/meeting_rooms",
    tag = MEETING_ROOM_TAG,
    responses(
        (status = 200, description = "All meeting rooms", body = Vec<MeetingRoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meeting_rooms(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = MeetingRoomService::new(&state.db).get_all().await?;

    let rooms: Vec<MeetingRoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rooms)))
}

/// Get a meeting room by ID.
#[utoipa::path(
    get,
    path = "/api/meeting_rooms/{id}",
    tag = MEETING_ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Meeting room ID")
    ),
    responses(
        (status = 200, description = "Meeting room", body = MeetingRoomDto),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meeting_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = MeetingRoomService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Partially update a meeting room.
///
/// Omitted fields are left unchanged. `description: null` clears the description;
/// `name: null` is rejected.
///
/// # Access Control
/// - `Superuser` - Only superusers can edit rooms
#[utoipa::path(
    patch,
    path = "/api/meeting_rooms/{id}",
    tag = MEETING_ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Meeting room ID")
    ),
    request_body = UpdateMeetingRoomDto,
    responses(
        (status = 200, description = "Meeting room updated", body = MeetingRoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a superuser", body = ErrorDto),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 422, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_meeting_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMeetingRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let param = UpdateMeetingRoomParam::from_dto(payload)?;

    let room = MeetingRoomService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Delete a meeting room and all of its reservations.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete rooms
///
/// # Returns
/// - `200 OK` - The deleted room
#[utoipa::path(
    delete,
    path = "/api/meeting_rooms/{id}",
    tag = MEETING_ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Meeting room ID")
    ),
    responses(
        (status = 200, description = "Meeting room deleted", body = MeetingRoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a superuser", body = ErrorDto),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_meeting_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let room = MeetingRoomService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// List the reservations of a room that have not finished yet.
#[utoipa::path(
    get,
    path = "/api/meeting_rooms/{id}/reservations",
    tag = MEETING_ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Meeting room ID")
    ),
    responses(
        (status = 200, description = "Upcoming reservations of the room", body = Vec<ReservationDto>),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meeting_room_reservations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = MeetingRoomService::new(&state.db)
        .get_reservations(id)
        .await?;

    let reservations: Vec<ReservationDto> =
        reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations)))
}
