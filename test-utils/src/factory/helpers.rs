//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group session together with its host user.
///
/// This is a convenience method that creates:
/// 1. User (as session host)
/// 2. Group session hosted by that user, with the host enrolled as a participant
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, session))` - Tuple of host user and created session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_session_with_host(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::group_session::Model), DbErr> {
    let host = crate::factory::user::create_user(db).await?;
    let session = crate::factory::group_session::create_group_session(db, host.id).await?;
    crate::factory::group_participant::create_participant(db, session.id, host.id).await?;

    Ok((host, session))
}

/// Creates a group session with a host and one additional enrolled participant.
///
/// Useful for tests that exercise participant-only behavior such as chat
/// posting or leaving a session.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((host, participant, session))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_session_with_participant(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::group_session::Model,
    ),
    DbErr,
> {
    let (host, session) = create_group_session_with_host(db).await?;
    let participant = crate::factory::user::create_user(db).await?;
    crate::factory::group_participant::create_participant(db, session.id, participant.id).await?;

    Ok((host, participant, session))
}
