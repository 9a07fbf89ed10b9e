use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        achievement::{
            AchievementDto, CreateAchievementDto, TotalPointsDto, UpdateAchievementDto,
            UserAchievementDto,
        },
        api::ErrorDto,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::achievement::{CreateAchievementParams, UpdateAchievementParams},
    service::achievement::AchievementService,
    state::AppState,
};

/// Tag for grouping achievement endpoints in OpenAPI documentation
pub static ACHIEVEMENT_TAG: &str = "achievement";

/// List all achievement definitions.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - All achievement definitions
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "All achievement definitions", body = Vec<AchievementDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    let achievements = AchievementService::new(&state.db).get_all().await?;

    let dtos: Vec<AchievementDto> = achievements.into_iter().map(|a| a.into_dto()).collect();

    Ok(Json(dtos))
}

/// Create a new achievement definition.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Definition data (name, category, criteria, icon, points)
///
/// # Returns
/// - `201 Created` - The created definition
/// - `400 Bad Request` - Unknown category, non-positive criteria value, or negative points
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    request_body = CreateAchievementDto,
    responses(
        (status = 201, description = "The created definition", body = AchievementDto),
        (status = 400, description = "Invalid definition data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_achievement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAchievementDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    let params = CreateAchievementParams::from_dto(payload);

    let achievement = AchievementService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(achievement.into_dto())))
}

/// Update an achievement definition.
///
/// Fields left out of the payload are unchanged.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The updated definition
/// - `400 Bad Request` - Invalid definition data
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No definition with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/achievements/{id}",
    tag = ACHIEVEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Achievement id")
    ),
    request_body = UpdateAchievementDto,
    responses(
        (status = 200, description = "The updated definition", body = AchievementDto),
        (status = 400, description = "Invalid definition data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Achievement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_achievement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAchievementDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    let params = UpdateAchievementParams::from_dto(id, payload);

    let achievement = AchievementService::new(&state.db).update(params).await?;

    Ok(Json(achievement.into_dto()))
}

/// Delete an achievement definition.
///
/// All user progress toward the achievement is deleted with it.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `204 No Content` - Definition deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No definition with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/achievements/{id}",
    tag = ACHIEVEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Achievement id")
    ),
    responses(
        (status = 204, description = "Definition deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Achievement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_achievement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    AchievementService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the current user's achievement progress.
///
/// Returns the user's progress records joined with their achievement
/// definitions.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The user's progress records
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/achievements/mine",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "The user's progress records", body = Vec<UserAchievementDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let statuses = AchievementService::new(&state.db)
        .get_user_achievements(user.id)
        .await?;

    let dtos: Vec<UserAchievementDto> = statuses.into_iter().map(|s| s.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get the current user's total achievement points.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - Sum of points over completed achievements
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/achievements/points",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Total points", body = TotalPointsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_points(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let total_points = AchievementService::new(&state.db)
        .total_points(user.id)
        .await?;

    Ok(Json(TotalPointsDto { total_points }))
}
