use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ConflictErrorDto, ErrorDto},
        meeting_room::{CreateMeetingRoomDto, MeetingRoomDto, UpdateMeetingRoomDto},
        report::{CreateReportDto, ReportDto, RoomReservationCountDto},
        reservation::{
            CreateReservationDto, MyReservationDto, ReservationDto, UpdateReservationDto,
        },
        user::{LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        controller::{auth, meeting_room, report, reservation},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        meeting_room::create_meeting_room,
        meeting_room::get_meeting_rooms,
        meeting_room::get_meeting_room_by_id,
        meeting_room::update_meeting_room,
        meeting_room::delete_meeting_room,
        meeting_room::get_meeting_room_reservations,
        reservation::create_reservation,
        reservation::get_reservations,
        reservation::get_my_reservations,
        reservation::update_reservation,
        reservation::delete_reservation,
        report::create_report,
    ),
    components(schemas(
        ErrorDto,
        ConflictErrorDto,
        UserDto,
        RegisterUserDto,
        LoginDto,
        MeetingRoomDto,
        CreateMeetingRoomDto,
        UpdateMeetingRoomDto,
        ReservationDto,
        MyReservationDto,
        CreateReservationDto,
        UpdateReservationDto,
        CreateReportDto,
        RoomReservationCountDto,
        ReportDto,
    )),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "meeting_room", description = "Meeting room management"),
        (name = "reservation", description = "Meeting room reservations"),
        (name = "report", description = "Spreadsheet reports"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/meeting_rooms",
            get(meeting_room::get_meeting_rooms).post(meeting_room::create_meeting_room),
        )
        .route(
            "/api/meeting_rooms/{id}",
            get(meeting_room::get_meeting_room_by_id)
                .patch(meeting_room::update_meeting_room)
                .delete(meeting_room::delete_meeting_room),
        )
        .route(
            "/api/meeting_rooms/{id}/reservations",
            get(meeting_room::get_meeting_room_reservations),
        )
        .route(
            "/api/reservations",
            get(reservation::get_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/my_reservations",
            get(reservation::get_my_reservations),
        )
        .route(
            "/api/reservations/{id}",
            patch(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route("/api/reports", post(report::create_report))
}

/// Swagger UI at `/api/docs`, serving the generated document at `/api/docs/openapi.json`.
pub fn docs(title: &str) -> SwaggerUi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = title.to_string();

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", doc)
}
