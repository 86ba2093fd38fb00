use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::report::{spreadsheet::SpreadsheetClient, ReportService},
};

/// Starts the scheduled spreadsheet export.
///
/// On every tick of `cron` (six-field expression, seconds first) the reservation counts
/// of the trailing 24 hours are exported. A failed run is logged and the schedule
/// continues.
///
/// # Arguments
/// - `db`: Database connection
/// - `client`: Spreadsheet collaborator
/// - `report_email`: Address each spreadsheet is shared with
/// - `cron`: Schedule expression
pub async fn start_scheduler(
    db: DatabaseConnection,
    client: SpreadsheetClient,
    report_email: Option<String>,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let client = client.clone();
        let report_email = report_email.clone();

        Box::pin(async move {
            let to = Utc::now();
            let from = to - Duration::hours(24);

            if let Err(e) = ReportService::new(&db)
                .export(&client, report_email.as_deref(), from, to)
                .await
            {
                tracing::error!("Scheduled report export failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Report export scheduler started ({})", cron);

    Ok(scheduler)
}
