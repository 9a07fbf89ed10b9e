use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    dto::api::ErrorDto,
    error::AppError,
    middleware::auth::AuthGuard,
    service::export::{ExportFile, ExportFormat, ExportService},
    state::AppState,
};

/// Tag for grouping export endpoints in OpenAPI documentation
pub static EXPORT_TAG: &str = "export";

#[derive(Deserialize)]
pub struct ExportParams {
    pub format: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Export the current user's meditation sessions.
///
/// Serves the records as a CSV or JSON file download, optionally bounded by a
/// start-time range.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Export format and optional `from`/`to` range
///
/// # Returns
/// - `200 OK` - The exported file
/// - `400 Bad Request` - Unknown format
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/export/meditation-sessions",
    tag = EXPORT_TAG,
    params(
        ("format" = String, Query, description = "Export format, csv or json"),
        ("from" = Option<String>, Query, description = "Only sessions started at or after this time"),
        ("to" = Option<String>, Query, description = "Only sessions started at or before this time")
    ),
    responses(
        (status = 200, description = "The exported file"),
        (status = 400, description = "Unknown format", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_meditation_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let format = ExportFormat::parse(&params.format)?;

    let file = ExportService::new(&state.db)
        .meditation_sessions(user.id, format, params.from, params.to)
        .await?;

    Ok(file_response(file))
}

/// Export the current user's stress assessments.
///
/// Serves the records as a CSV or JSON file download, optionally bounded by a
/// recorded-time range.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The exported file
/// - `400 Bad Request` - Unknown format
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/export/stress-assessments",
    tag = EXPORT_TAG,
    params(
        ("format" = String, Query, description = "Export format, csv or json"),
        ("from" = Option<String>, Query, description = "Only assessments recorded at or after this time"),
        ("to" = Option<String>, Query, description = "Only assessments recorded at or before this time")
    ),
    responses(
        (status = 200, description = "The exported file"),
        (status = 400, description = "Unknown format", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_stress_assessments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let format = ExportFormat::parse(&params.format)?;

    let file = ExportService::new(&state.db)
        .stress_assessments(user.id, format, params.from, params.to)
        .await?;

    Ok(file_response(file))
}

fn file_response(file: ExportFile) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.body,
    )
}
