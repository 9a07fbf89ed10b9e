//! User domain models and parameters.
//!
//! Provides domain models for application users with email identity and login
//! tracking. Includes parameter types for user registration.

use chrono::{DateTime, Utc};

use crate::dto::user::UserDto;

/// Application user with email identity and login tracking.
///
/// Carries the stored password hash for credential verification in the auth
/// service. The hash never leaves the domain layer, `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique email address used for login.
    pub email: String,
    /// Display name shown to other participants.
    pub display_name: String,
    /// Argon2 PHC-formatted password hash.
    pub password_hash: String,
    /// Number of successful logins.
    pub login_count: i32,
    /// Last successful login, None for users who never logged in.
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is intentionally not part of the DTO.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            login_count: self.login_count,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            display_name: entity.display_name,
            password_hash: entity.password_hash,
            login_count: entity.login_count,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user during registration.
///
/// The password arrives here already hashed, the plain text password never
/// crosses the service boundary.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}
