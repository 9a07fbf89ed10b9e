//! Password hashing and verification using Argon2id.
//!
//! Hashes are stored in PHC string format, which embeds the salt and the
//! hashing parameters alongside the digest.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hashes a password with a freshly generated salt.
///
/// # Arguments
/// - `password` - Plain text password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash string including salt and parameters
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

/// Verifies a password against a stored hash.
///
/// # Arguments
/// - `password` - Plain text password from a login attempt
/// - `hash` - PHC-formatted hash from the database
///
/// # Returns
/// - `Ok(true)` - Password matches the hash
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - Stored hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::InternalError(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
