//! Bearer token issuing and validation.
//!
//! Tokens are signed with HS256 and expire 24 hours after issue. The signing
//! secret comes from application configuration and is never logged.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Payload stored in a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id of the token holder.
    pub sub: i32,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Issues a signed token for the given user id.
///
/// # Arguments
/// - `user_id` - Id of the user to issue the token for
/// - `secret` - Signing secret from configuration
///
/// # Returns
/// - `Ok(String)` - Encoded token valid for 24 hours
/// - `Err(AppError::JwtErr)` - Signing failed
pub fn issue_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now + TOKEN_TTL_SECONDS,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verifies a token and returns its claims.
///
/// # Arguments
/// - `token` - Encoded token from the `Authorization` header
/// - `secret` - Signing secret from configuration
///
/// # Returns
/// - `Ok(Claims)` - Token is valid and not expired
/// - `Err(AuthError::ExpiredToken)` - Token is past its expiry
/// - `Err(AuthError::InvalidToken)` - Signature or structure validation failed
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })
}
