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
        chat::{ChatMessageDto, CreateChatMessageDto, PaginatedChatMessagesDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::chat::CreateChatMessageParams,
    service::chat::ChatService,
    state::AppState,
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Post a message to a group session's chat.
///
/// # Access Control
/// Requires a valid bearer token; participants only.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Group session id
/// - `payload` - Message content
///
/// # Returns
/// - `201 Created` - The posted message
/// - `400 Bad Request` - Empty or over-length content
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a participant
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/group-sessions/{id}/messages",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Group session id")
    ),
    request_body = CreateChatMessageDto,
    responses(
        (status = 201, description = "The posted message", body = ChatMessageDto),
        (status = 400, description = "Invalid message content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateChatMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let message = ChatService::new(&state.db)
        .post(CreateChatMessageParams {
            group_session_id: id,
            user_id: user.id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// List a group session's chat messages.
///
/// Returns a page of messages, oldest first.
///
/// # Access Control
/// Requires a valid bearer token; participants only.
///
/// # Returns
/// - `200 OK` - Page of messages with pagination metadata
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a participant
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/group-sessions/{id}/messages",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Group session id"),
        ("page" = u64, Query, description = "Zero-indexed page number"),
        ("per_page" = u64, Query, description = "Number of messages per page")
    ),
    responses(
        (status = 200, description = "Page of messages", body = PaginatedChatMessagesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let messages = ChatService::new(&state.db)
        .get_paginated(id, user.id, params.page, params.per_page)
        .await?;

    Ok(Json(messages.into_dto()))
}
