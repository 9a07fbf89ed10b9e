//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every fallible layer of
//! the application. It wraps domain-specific errors such as `AuthError` and
//! implements `IntoResponse`, so handlers can propagate errors with `?` and
//! still produce a well-formed JSON error body with the right status code.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    dto::api::ErrorDto,
    error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Infrastructure errors convert in through `#[from]` and map to 500 responses
/// with details kept server-side. The message-carrying variants (`NotFound`,
/// `BadRequest`, `Forbidden`, `Conflict`) are raised by the service layer and
/// map to their matching status codes. `AuthError` keeps its own response
/// mapping since it distinguishes 401 from 403.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// CSV serialization error during data export.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    CsvErr(#[from] csv::Error),

    /// Token creation error from jsonwebtoken.
    ///
    /// Covers signing failures when issuing tokens. Token validation failures are
    /// mapped to `AuthError` variants instead. Results in 500 Internal Server Error.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Requested resource does not exist.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message naming the missing resource
    #[error("{0}")]
    NotFound(String),

    /// Request payload or query failed validation.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing the invalid field or value
    #[error("{0}")]
    BadRequest(String),

    /// Access denied for an authenticated user.
    ///
    /// Results in 403 Forbidden with the provided error message. Used when the
    /// caller is logged in but does not own or participate in the resource.
    ///
    /// # Fields
    /// - Message describing why access was denied
    #[error("{0}")]
    Forbidden(String),

    /// Request conflicts with current resource state.
    ///
    /// Results in 409 Conflict with the provided error message. Used for duplicate
    /// registrations, duplicate active sessions, and invalid lifecycle transitions.
    ///
    /// # Fields
    /// - Message describing the conflicting state
    #[error("{0}")]
    Conflict(String),

    /// Internal failure with a message meant for the server log only.
    ///
    /// Results in 500 Internal Server Error. The message is logged and the
    /// client receives a generic body instead.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Message-carrying variants surface their message in the JSON body.
/// Everything else is treated as an internal failure: logged in full,
/// reported to the client generically.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, CsvErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback wrapper turning any displayable error into a 500 response.
///
/// Used for variants without a dedicated mapping, such as database or CSV
/// errors. The wrapped error is logged; the client sees a generic body.
pub struct InternalServerError<E>(pub E);

/// Logs the wrapped error and responds with a generic 500 body.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
