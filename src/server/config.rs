use std::net::SocketAddr;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::report::spreadsheet::{DEFAULT_DRIVE_API_URL, DEFAULT_SHEETS_API_URL},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_TITLE: &str = "Meeting room booking";

/// Credentials of the account created on first start.
pub struct FirstSuperuser {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub app_title: String,

    pub first_superuser: Option<FirstSuperuser>,

    pub report_email: Option<String>,
    pub report_export_cron: Option<String>,

    pub sheets_api_url: String,
    pub drive_api_url: String,
    pub sheets_access_token: Option<String>,

    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = optional_var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let first_superuser = match (
            optional_var("FIRST_SUPERUSER_EMAIL"),
            optional_var("FIRST_SUPERUSER_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(FirstSuperuser { email, password }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("FIRST_SUPERUSER_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("FIRST_SUPERUSER_EMAIL".to_string()).into())
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr,
            app_title: optional_var("APP_TITLE").unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
            first_superuser,
            report_email: optional_var("REPORT_EMAIL"),
            report_export_cron: optional_var("REPORT_EXPORT_CRON"),
            sheets_api_url: url_var("SHEETS_API_URL", DEFAULT_SHEETS_API_URL)?,
            drive_api_url: url_var("DRIVE_API_URL", DEFAULT_DRIVE_API_URL)?,
            sheets_access_token: optional_var("SHEETS_ACCESS_TOKEN"),
            cors_origin: optional_var("CORS_ORIGIN"),
        })
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn url_var(name: &str, default: &str) -> Result<String, ConfigError> {
    let value = optional_var(name).unwrap_or_else(|| default.to_string());

    url::Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(value)
}
