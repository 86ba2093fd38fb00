//! HTTP client for a Google Sheets v4 / Drive v3 compatible API.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::error::AppError;

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_DRIVE_API_URL: &str = "https://www.googleapis.com";

const SPREADSHEET_LOCALE: &str = "ru_RU";
const SHEET_ROW_COUNT: u32 = 100;
const SHEET_COLUMN_COUNT: u32 = 11;
const VALUES_RANGE: &str = "A1:E30";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedSpreadsheet {
    spreadsheet_id: String,
}

/// Authenticated client for creating, sharing and filling spreadsheets.
///
/// The bearer token is sent as-is; obtaining and refreshing it happens outside the
/// service.
#[derive(Clone)]
pub struct SpreadsheetClient {
    http: reqwest::Client,
    sheets_api_url: String,
    drive_api_url: String,
    access_token: String,
}

impl SpreadsheetClient {
    pub fn new(
        http: reqwest::Client,
        sheets_api_url: &str,
        drive_api_url: &str,
        access_token: String,
    ) -> Self {
        Self {
            http,
            sheets_api_url: sheets_api_url.trim_end_matches('/').to_string(),
            drive_api_url: drive_api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Creates an empty single-sheet spreadsheet.
    ///
    /// # Returns
    /// - `Ok(id)`: ID of the new spreadsheet
    /// - `Err(AppError::ReqwestErr)`: Transport error or non-success status
    pub async fn create_spreadsheet(&self, title: &str) -> Result<String, AppError> {
        let body = json!({
            "properties": {
                "title": title,
                "locale": SPREADSHEET_LOCALE,
            },
            "sheets": [{
                "properties": {
                    "sheetType": "GRID",
                    "sheetId": 0,
                    "title": "Sheet1",
                    "gridProperties": {
                        "rowCount": SHEET_ROW_COUNT,
                        "columnCount": SHEET_COLUMN_COUNT,
                    },
                },
            }],
        });

        let created: CreatedSpreadsheet = self
            .http
            .post(format!("{}/v4/spreadsheets", self.sheets_api_url))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(created.spreadsheet_id)
    }

    /// Grants `email` writer access to the spreadsheet.
    pub async fn share_with(&self, spreadsheet_id: &str, email: &str) -> Result<(), AppError> {
        let body = json!({
            "type": "user",
            "role": "writer",
            "emailAddress": email,
        });

        self.http
            .post(format!(
                "{}/drive/v3/files/{}/permissions",
                self.drive_api_url, spreadsheet_id
            ))
            .query(&[("fields", "id")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Overwrites the report range with `rows`, parsing values as if typed by a user.
    pub async fn update_values(
        &self,
        spreadsheet_id: &str,
        rows: Vec<Vec<Value>>,
    ) -> Result<(), AppError> {
        let body = json!({
            "majorDimension": "ROWS",
            "values": rows,
        });

        self.http
            .put(format!(
                "{}/v4/spreadsheets/{}/values/{}",
                self.sheets_api_url, spreadsheet_id, VALUES_RANGE
            ))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    pub fn spreadsheet_url(&self, spreadsheet_id: &str) -> String {
        format!("https://docs.google.com/spreadsheets/d/{}", spreadsheet_id)
    }
}
