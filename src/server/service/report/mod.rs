//! Reservation count report and its export to a spreadsheet.

pub mod spreadsheet;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::report::{ExportedReport, RoomReservationCount},
    service::report::spreadsheet::SpreadsheetClient,
};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Builds the sheet rows for a report.
///
/// Layout: a title row with the generation time, a caption row, a header row, then one
/// `[room id, count]` row per room.
pub fn build_report_table(
    generated_at: DateTime<Utc>,
    counts: &[RoomReservationCount],
) -> Vec<Vec<Value>> {
    let mut rows = vec![
        vec![
            json!("Report from"),
            json!(generated_at.format(TIMESTAMP_FORMAT).to_string()),
        ],
        vec![json!("Meeting room reservation count")],
        vec![json!("Meeting room ID"), json!("Reservations")],
    ];

    rows.extend(
        counts
            .iter()
            .map(|c| vec![json!(c.meeting_room_id), json!(c.count)]),
    );

    rows
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts reservations per room that lie entirely within `[from, to]`.
    ///
    /// # Returns
    /// - `Ok(counts)`: One entry per room with reservations, ordered by room ID
    /// - `Err(AppError::BadRequest)`: `from` is after `to`
    pub async fn count_by_room(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<RoomReservationCount>, AppError> {
        if from > to {
            return Err(AppError::BadRequest(
                "Report period must not end before it starts".to_string(),
            ));
        }

        let repo = ReservationRepository::new(self.db);

        Ok(repo.count_by_room(from, to).await?)
    }

    /// Counts reservations for the period and writes them to a new spreadsheet.
    ///
    /// The spreadsheet is shared with `share_with` when given, before the values are
    /// written.
    pub async fn export(
        &self,
        client: &SpreadsheetClient,
        share_with: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<ExportedReport, AppError> {
        let counts = self.count_by_room(from, to).await?;
        let now = Utc::now();

        let title = format!("Report from {}", now.format(TIMESTAMP_FORMAT));
        let spreadsheet_id = client.create_spreadsheet(&title).await?;

        if let Some(email) = share_with {
            client.share_with(&spreadsheet_id, email).await?;
        }

        let rows = build_report_table(now, &counts);
        client.update_values(&spreadsheet_id, rows).await?;

        tracing::info!(
            "Exported reservation counts for {} rooms to spreadsheet {}",
            counts.len(),
            spreadsheet_id
        );

        Ok(ExportedReport {
            spreadsheet_url: client.spreadsheet_url(&spreadsheet_id),
            spreadsheet_id,
            counts,
        })
    }
}
