use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    dto::auth::{LoginDto, RegisterDto},
    error::{auth::AuthError, AppError},
    model::{
        achievement::{ActivityEvent, ActivityKind},
        user::{RegisterUserParams, User},
    },
    service::achievement::AchievementService,
    util::{jwt, password},
};

/// Minimum accepted password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account and issues a token for it.
    ///
    /// # Returns
    /// - `Ok((String, User))` - The signed token and the new user
    /// - `Err(AppError::BadRequest)` - Invalid email, display name, or password
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(
        &self,
        dto: RegisterDto,
        jwt_secret: &str,
    ) -> Result<(String, User), AppError> {
        validate_email(&dto.email)?;

        if dto.display_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Display name must not be empty".to_string(),
            ));
        }

        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = password::hash_password(&dto.password)?;

        let user = repo
            .create(RegisterUserParams {
                email: dto.email,
                display_name: dto.display_name,
                password_hash,
            })
            .await?;

        let token = jwt::issue_token(user.id, jwt_secret)?;

        Ok((token, user))
    }

    /// Verifies credentials, records the login, and issues a token.
    ///
    /// A successful login increments the user's login count, stamps the login
    /// time, and fires a `login` activity event toward achievements.
    ///
    /// # Returns
    /// - `Ok((String, User))` - The signed token and the logged-in user
    /// - `Err(AppError::AuthErr)` - Unknown email or wrong password
    pub async fn login(&self, dto: LoginDto, jwt_secret: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = repo.record_login(user.id).await?;

        AchievementService::new(self.db)
            .process_activity(user.id, ActivityEvent::new(ActivityKind::Login))
            .await?;

        let token = jwt::issue_token(user.id, jwt_secret)?;

        Ok((token, user))
    }

    /// Gets the user behind an authenticated request
    pub async fn me(&self, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(user)
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email.contains('@')
        && !email.starts_with('@')
        && !email.ends_with('@')
        && !email.contains(char::is_whitespace);

    if !valid {
        return Err(AppError::BadRequest(
            "Email address is not valid".to_string(),
        ));
    }

    Ok(())
}
