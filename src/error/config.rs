use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` must both be present, either in the
    /// process environment or in a `.env` file.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but could not be parsed.
    ///
    /// Occurs when a numeric variable such as `PORT` holds a non-numeric value.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
