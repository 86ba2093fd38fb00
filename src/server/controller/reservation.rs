use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ConflictErrorDto, ErrorDto},
        reservation::{
            CreateReservationDto, MyReservationDto, ReservationDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reservation::{CreateReservationParam, UpdateReservationParam},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Reserve a meeting room.
///
/// The reservation is owned by the logged-in user. The start must lie in the future,
/// the end after the start, and the range must not overlap any other reservation of
/// the room. Touching ranges (one ends exactly when the other starts) are allowed.
///
/// # Returns
/// - `201 Created` - Reservation stored
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Meeting room does not exist
/// - `422 Unprocessable Entity` - Invalid range, or overlap (lists the conflicts)
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Meeting room not found", body = ErrorDto),
        (status = 422, description = "Invalid range or overlapping reservation", body = ConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateReservationParam::from_dto(user.id, payload, Utc::now())?;

    let reservation = ReservationService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List all reservations.
///
/// # Access Control
/// - `Superuser` - Only superusers can list every reservation
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a superuser", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let reservations = ReservationService::new(&state.db).get_all().await?;

    let reservations: Vec<ReservationDto> =
        reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations)))
}

/// List the logged-in user's reservations.
#[utoipa::path(
    get,
    path = "/api/reservations/my_reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Reservations of the current user", body = Vec<MyReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .get_by_user(user.id)
        .await?;

    let reservations: Vec<MyReservationDto> =
        reservations.into_iter().map(|r| r.into_my_dto()).collect();

    Ok((StatusCode::OK, Json(reservations)))
}

/// Move a reservation to a new range.
///
/// # Access Control
/// - Owner of the reservation, or any superuser
#[utoipa::path(
    patch,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither owner nor superuser", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 422, description = "Invalid range or overlapping reservation", body = ConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateReservationParam::from_dto(payload, Utc::now())?;

    let reservation = ReservationService::new(&state.db)
        .update(&user, id, param)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation.
///
/// # Access Control
/// - Owner of the reservation, or any superuser
///
/// # Returns
/// - `200 OK` - The deleted reservation
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = ReservationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither owner nor superuser", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .delete(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}
