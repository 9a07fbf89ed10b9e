use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing authorization token")]
    MissingToken,

    /// The bearer token failed signature or structure validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid authorization token")]
    InvalidToken,

    /// The bearer token was valid but past its expiry.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Expired authorization token")]
    ExpiredToken,

    /// Login failed due to an unknown email or wrong password.
    ///
    /// The two cases share one variant so the response cannot be used to
    /// probe which emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The token referenced a user id that no longer exists in the database.
    ///
    /// Occurs when a user account is deleted while a token issued for it is
    /// still in circulation. Results in a 401 Unauthorized response.
    ///
    /// # Fields
    /// - The user id carried in the token
    #[error("User with id {0} not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages:
/// - `MissingToken` → 401 Unauthorized with "Missing authorization token"
/// - `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized with "Invalid authorization token"
/// - `ExpiredToken` → 401 Unauthorized with "Expired authorization token"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For all authentication failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failure: {}", self);

        let message = match self {
            Self::MissingToken => "Missing authorization token",
            Self::InvalidToken | Self::UserNotInDatabase(_) => "Invalid authorization token",
            Self::ExpiredToken => "Expired authorization token",
            Self::InvalidCredentials => "Invalid email or password",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
