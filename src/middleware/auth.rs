use axum::http::{header, HeaderMap};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AppState,
    util::jwt,
};

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request from its `Authorization: Bearer` header.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing, malformed, expired, or orphaned token
    pub async fn require(&self) -> Result<User, AppError> {
        let token = self.bearer_token()?;

        let claims = jwt::decode_token(token, &self.state.jwt_secret)?;

        let Some(user) = UserRepository::new(&self.state.db)
            .find_by_id(claims.sub)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;

        value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidToken)
    }
}
