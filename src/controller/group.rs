use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationParams,
    dto::{
        api::ErrorDto,
        group::{CreateGroupSessionDto, GroupSessionDto, PaginatedGroupSessionsDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::group::CreateGroupSessionParams,
    service::group::GroupService,
    state::AppState,
};

/// Tag for grouping group session endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create a new group meditation session.
///
/// The caller becomes the host and is enrolled as the first participant.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Session data (title, schedule, duration, capacity)
///
/// # Returns
/// - `201 Created` - The created session
/// - `400 Bad Request` - Schedule in the past, capacity below 2, or non-positive duration
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions",
    tag = GROUP_TAG,
    request_body = CreateGroupSessionDto,
    responses(
        (status = 201, description = "The created session", body = GroupSessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGroupSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let params = CreateGroupSessionParams::from_dto(user.id, payload);

    let session = GroupService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// List upcoming group sessions.
///
/// Returns a page of scheduled sessions, soonest first, each with its
/// participant count.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - Page of sessions with pagination metadata
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/group-sessions",
    tag = GROUP_TAG,
    params(
        ("page" = u64, Query, description = "Zero-indexed page number"),
        ("per_page" = u64, Query, description = "Number of sessions per page")
    ),
    responses(
        (status = 200, description = "Page of sessions", body = PaginatedGroupSessionsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    let sessions = GroupService::new(&state.db)
        .get_upcoming_paginated(params.page, params.per_page)
        .await?;

    Ok(Json(sessions.into_dto()))
}

/// Get a group session with its participant count.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The session
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/group-sessions/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    responses(
        (status = 200, description = "The session", body = GroupSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    let session = GroupService::new(&state.db).get_by_id(id).await?;

    Ok(Json(session.into_dto()))
}

/// Join a group session.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The session after joining
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No session with this id
/// - `409 Conflict` - Session full, already joined, or not joinable
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions/{id}/join",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    responses(
        (status = 200, description = "The session after joining", body = GroupSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session full, already joined, or not joinable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let session = GroupService::new(&state.db).join(id, user.id).await?;

    Ok(Json(session.into_dto()))
}

/// Leave a group session.
///
/// The host cannot leave their own session and must cancel it instead.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `204 No Content` - Left the session
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Unknown session or not a participant
/// - `409 Conflict` - The host cannot leave
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions/{id}/leave",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    responses(
        (status = 204, description = "Left the session"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Unknown session or not a participant", body = ErrorDto),
        (status = 409, description = "The host cannot leave", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    GroupService::new(&state.db).leave(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancel a scheduled group session.
///
/// # Access Control
/// Host only.
///
/// # Returns
/// - `200 OK` - The cancelled session
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not the host
/// - `404 Not Found` - No session with this id
/// - `409 Conflict` - Session is not in the scheduled state
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions/{id}/cancel",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    responses(
        (status = 200, description = "The cancelled session", body = GroupSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session is not scheduled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let service = GroupService::new(&state.db);

    let session = service.cancel(id, user.id).await?;
    let session = service.get_by_id(session.id).await?;

    Ok(Json(session.into_dto()))
}

/// Start a scheduled group session.
///
/// # Access Control
/// Host only.
///
/// # Returns
/// - `200 OK` - The session, now in progress
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not the host
/// - `404 Not Found` - No session with this id
/// - `409 Conflict` - Session is not in the scheduled state
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions/{id}/start",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    responses(
        (status = 200, description = "The session, now in progress", body = GroupSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session is not scheduled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let service = GroupService::new(&state.db);

    let session = service.start(id, user.id).await?;
    let session = service.get_by_id(session.id).await?;

    Ok(Json(session.into_dto()))
}

/// Complete an in-progress group session.
///
/// # Access Control
/// Host only.
///
/// # Returns
/// - `200 OK` - The completed session
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not the host
/// - `404 Not Found` - No session with this id
/// - `409 Conflict` - Session is not in progress
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions/{id}/complete",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    responses(
        (status = 200, description = "The completed session", body = GroupSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session is not in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_group_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let service = GroupService::new(&state.db);

    let session = service.complete(id, user.id).await?;
    let session = service.get_by_id(session.id).await?;

    Ok(Json(session.into_dto()))
}
