use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request is not authenticated. Results in 401 Unauthorized.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 404 Not Found.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the permission required for the operation.
    ///
    /// Results in 403 Forbidden.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email, wrong password or deactivated account.
    ///
    /// All three map to the same 401 response so that the endpoint does not reveal
    /// which emails are registered.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Password rejected by the registration rules.
    ///
    /// Results in 422 Unprocessable Entity with the reason.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// Email address is not syntactically usable.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A user with this email already exists.
    #[error("User with email {0} already exists")]
    DuplicateEmail(String),

    /// Hashing or parsing a stored credential failed.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `InvalidPassword` / `InvalidEmail` / `DuplicateEmail` → 422 Unprocessable Entity
/// - `PasswordHash` → 500 Internal Server Error
///
/// Denials are logged at debug level, hashing failures at error level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action".to_string(),
                )
            }
            Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            Self::InvalidPassword(_) | Self::InvalidEmail(_) | Self::DuplicateEmail(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
