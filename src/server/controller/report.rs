use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        report::{CreateReportDto, ReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Export per-room reservation counts for a period to a new spreadsheet.
///
/// Counts reservations lying entirely within `[from, to]`. The spreadsheet is shared
/// with the configured report email, if any.
///
/// # Access Control
/// - `Superuser` - Only superusers can export reports
///
/// # Returns
/// - `201 Created` - Spreadsheet created and filled
/// - `400 Bad Request` - Export not configured, or `from` after `to`
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report exported", body = ReportDto),
        (status = 400, description = "Export not configured or invalid period", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a superuser", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let Some(client) = state.spreadsheet_client.as_ref() else {
        return Err(AppError::BadRequest(
            "Spreadsheet export is not configured".to_string(),
        ));
    };

    let report = ReportService::new(&state.db)
        .export(
            client,
            state.report_email.as_deref(),
            payload.from,
            payload.to,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}
