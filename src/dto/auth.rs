use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::user::UserDto;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Issued bearer token plus the authenticated user's profile.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}
