//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::report::spreadsheet::SpreadsheetClient;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// spreadsheet client wraps a `reqwest::Client`, which is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Spreadsheet collaborator for report exports.
    ///
    /// `None` when no access token is configured; report endpoints then answer 400.
    pub spreadsheet_client: Option<SpreadsheetClient>,

    /// Address every exported spreadsheet is shared with.
    pub report_email: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        spreadsheet_client: Option<SpreadsheetClient>,
        report_email: Option<String>,
    ) -> Self {
        Self {
            db,
            spreadsheet_client,
            report_email,
        }
    }
}
