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
        stress::{
            CreateStressAssessmentDto, PaginatedStressAssessmentsDto, StressAssessmentDto,
            StressInsightsDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::stress::CreateStressAssessmentParams,
    service::stress::StressService,
    state::AppState,
};

/// Tag for grouping stress assessment endpoints in OpenAPI documentation
pub static STRESS_TAG: &str = "stress";

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct InsightsParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub top: Option<usize>,
}

/// Record a new stress assessment.
///
/// Also advances milestone achievements tracking score improvement against
/// the previous assessment.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Assessment data (scores, triggers, symptoms, optional time)
///
/// # Returns
/// - `201 Created` - The recorded assessment
/// - `400 Bad Request` - A score outside 0 to 10
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/stress-assessments",
    tag = STRESS_TAG,
    request_body = CreateStressAssessmentDto,
    responses(
        (status = 201, description = "The recorded assessment", body = StressAssessmentDto),
        (status = 400, description = "Invalid assessment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_assessment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStressAssessmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let params = CreateStressAssessmentParams::from_dto(user.id, payload);

    let assessment = StressService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(assessment.into_dto())))
}

/// List the current user's stress assessments.
///
/// Returns a page of assessments, newest first, optionally bounded by a
/// recorded-time range.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - Page of assessments with pagination metadata
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stress-assessments",
    tag = STRESS_TAG,
    params(
        ("page" = u64, Query, description = "Zero-indexed page number"),
        ("per_page" = u64, Query, description = "Number of assessments per page"),
        ("from" = Option<String>, Query, description = "Only assessments recorded at or after this time"),
        ("to" = Option<String>, Query, description = "Only assessments recorded at or before this time")
    ),
    responses(
        (status = 200, description = "Page of assessments", body = PaginatedStressAssessmentsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assessments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let assessments = StressService::new(&state.db)
        .get_paginated(user.id, params.page, params.per_page, params.from, params.to)
        .await?;

    Ok(Json(assessments.into_dto()))
}

/// Analyze the current user's stress assessments over a window.
///
/// The window defaults to the last 30 days. Returns the average score, trend
/// classification, most common triggers and symptoms, peak stress hours, and
/// generated summary strings.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK` - The windowed analysis
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stress-assessments/insights",
    tag = STRESS_TAG,
    params(
        ("from" = Option<String>, Query, description = "Window start, defaults to 30 days ago"),
        ("to" = Option<String>, Query, description = "Window end, defaults to now"),
        ("top" = Option<usize>, Query, description = "Entries per top-N list, defaults to 3")
    ),
    responses(
        (status = 200, description = "The windowed analysis", body = StressInsightsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<InsightsParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let insights = StressService::new(&state.db)
        .insights(user.id, params.from, params.to, params.top)
        .await?;

    Ok(Json(insights.into_dto()))
}

/// Get one of the current user's stress assessments.
///
/// # Access Control
/// Requires a valid bearer token; the assessment must belong to the caller.
///
/// # Returns
/// - `200 OK` - The assessment
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Assessment belongs to another user
/// - `404 Not Found` - No assessment with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stress-assessments/{id}",
    tag = STRESS_TAG,
    params(
        ("id" = i32, Path, description = "Stress assessment id")
    ),
    responses(
        (status = 200, description = "The assessment", body = StressAssessmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Assessment belongs to another user", body = ErrorDto),
        (status = 404, description = "Assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assessment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let assessment = StressService::new(&state.db).get_by_id(id, user.id).await?;

    Ok(Json(assessment.into_dto()))
}

/// Delete one of the current user's stress assessments.
///
/// # Access Control
/// Requires a valid bearer token; the assessment must belong to the caller.
///
/// # Returns
/// - `204 No Content` - Assessment deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Assessment belongs to another user
/// - `404 Not Found` - No assessment with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/stress-assessments/{id}",
    tag = STRESS_TAG,
    params(
        ("id" = i32, Path, description = "Stress assessment id")
    ),
    responses(
        (status = 204, description = "Assessment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Assessment belongs to another user", body = ErrorDto),
        (status = 404, description = "Assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assessment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    StressService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
