use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user account.
///
/// Creates the account with an argon2-hashed password and immediately issues
/// a bearer token for it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (email, display name, password)
///
/// # Returns
/// - `201 Created` - Account created, token and user returned
/// - `400 Bad Request` - Invalid email, display name, or password
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db)
        .register(payload, &state.jwt_secret)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// A successful login increments the user's login count and feeds the `login`
/// activity into achievement progress.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Credentials (email, password)
///
/// # Returns
/// - `200 OK` - Token and user returned
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db)
        .login(payload, &state.jwt_secret)
        .await?;

    Ok(Json(AuthResponseDto {
        token,
        user: user.into_dto(),
    }))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// Requires a valid bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Missing, invalid, or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let user = AuthService::new(&state.db).me(user.id).await?;

    Ok(Json(user.into_dto()))
}
