use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Opens the database and brings the schema up to date.
///
/// Connects to the SQLite database named by `DATABASE_URL` and applies any
/// pending migrations before the server starts accepting requests. Per-query
/// sqlx logging is disabled; request-level tracing comes from the HTTP layer.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pooled connection with migrations applied
/// - `Err(AppError::DbErr)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
