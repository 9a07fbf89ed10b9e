use sea_orm::DbErr;
use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Debug, Error)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] DbErr),
}
