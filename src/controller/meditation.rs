use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    controller::default_per_page,
    dto::{
        api::ErrorDto,
        meditation::{
            CompleteMeditationSessionDto, CreateMeditationSessionDto, MeditationSessionDto,
            PaginatedMeditationSessionsDto, UpdateMeditationSessionDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::meditation::{CreateMeditationSessionParams, UpdateMeditationSessionParams},
    service::meditation::MeditationService,
    state::AppState,
};

/// Tag for grouping meditation session endpoints in OpenAPI documentation
pub static MEDITATION_TAG: &str = "meditation";

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Start a new meditation session.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Session data (title, type, duration, optional start time and mood)
///
/// # Returns
/// - `201 Created` - Successfully started session
/// - `400 Bad Request` - Invalid type, duration, or mood
/// - `401 Unauthorized` - Not authenticated
/// - `409 Conflict` - An active session already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/meditation-sessions",
    tag = MEDITATION_TAG,
    request_body = CreateMeditationSessionDto,
    responses(
        (status = 201, description = "Successfully started session", body = MeditationSessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "An active session already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMeditationSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let params = CreateMeditationSessionParams::from_dto(user.id, payload);

    let session = MeditationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// List the current user's meditation sessions.
///
/// Returns a page of sessions, newest first, optionally bounded by a
/// start-time range.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Pagination and optional `from`/`to` range
///
/// # Returns
/// - `200 OK` - Page of sessions with pagination metadata
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/meditation-sessions",
    tag = MEDITATION_TAG,
    params(
        ("page" = u64, Query, description = "Zero-indexed page number"),
        ("per_page" = u64, Query, description = "Number of sessions per page"),
        ("from" = Option<String>, Query, description = "Only sessions started at or after this time"),
        ("to" = Option<String>, Query, description = "Only sessions started at or before this time")
    ),
    responses(
        (status = 200, description = "Page of sessions", body = PaginatedMeditationSessionsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let sessions = MeditationService::new(&state.db)
        .get_paginated(user.id, params.page, params.per_page, params.from, params.to)
        .await?;

    Ok(Json(sessions.into_dto()))
}

/// Get one of the current user's meditation sessions.
///
/// # Access Control
/// Requires a valid bearer token; the session must belong to the caller.
///
/// # Returns
/// - `200 OK` - The session
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Session belongs to another user
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/meditation-sessions/{id}",
    tag = MEDITATION_TAG,
    params(
        ("id" = i32, Path, description = "Meditation session id")
    ),
    responses(
        (status = 200, description = "The session", body = MeditationSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Session belongs to another user", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let session = MeditationService::new(&state.db)
        .get_by_id(id, user.id)
        .await?;

    Ok(Json(session.into_dto()))
}

/// Update one of the current user's meditation sessions.
///
/// Fields left out of the payload are unchanged.
///
/// # Access Control
/// Requires a valid bearer token; the session must belong to the caller.
///
/// # Returns
/// - `200 OK` - The updated session
/// - `400 Bad Request` - Invalid type, duration, or mood
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Session belongs to another user
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/meditation-sessions/{id}",
    tag = MEDITATION_TAG,
    params(
        ("id" = i32, Path, description = "Meditation session id")
    ),
    request_body = UpdateMeditationSessionDto,
    responses(
        (status = 200, description = "The updated session", body = MeditationSessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Session belongs to another user", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMeditationSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let params = UpdateMeditationSessionParams::from_dto(id, payload);

    let session = MeditationService::new(&state.db)
        .update(params, user.id)
        .await?;

    Ok(Json(session.into_dto()))
}

/// Complete one of the current user's meditation sessions.
///
/// Sets the end time and optional after-mood, then advances achievement
/// progress for the completion and the user's daily streak.
///
/// # Access Control
/// Requires a valid bearer token; the session must belong to the caller.
///
/// # Returns
/// - `200 OK` - The completed session
/// - `400 Bad Request` - Mood outside 1 to 10
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Session belongs to another user
/// - `404 Not Found` - No session with this id
/// - `409 Conflict` - Session already completed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/meditation-sessions/{id}/complete",
    tag = MEDITATION_TAG,
    params(
        ("id" = i32, Path, description = "Meditation session id")
    ),
    request_body = CompleteMeditationSessionDto,
    responses(
        (status = 200, description = "The completed session", body = MeditationSessionDto),
        (status = 400, description = "Invalid mood rating", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Session belongs to another user", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CompleteMeditationSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let session = MeditationService::new(&state.db)
        .complete(id, user.id, payload.mood_after)
        .await?;

    Ok(Json(session.into_dto()))
}

/// Delete one of the current user's meditation sessions.
///
/// # Access Control
/// Requires a valid bearer token; the session must belong to the caller.
///
/// # Returns
/// - `204 No Content` - Session deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Session belongs to another user
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/meditation-sessions/{id}",
    tag = MEDITATION_TAG,
    params(
        ("id" = i32, Path, description = "Meditation session id")
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Session belongs to another user", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    MeditationService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
