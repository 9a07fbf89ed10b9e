//! Group participant factory for enrolling test users in group sessions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Enrolls a user in a group session.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_session_id` - Session to enroll in
/// - `user_id` - User to enroll
///
/// # Returns
/// - `Ok(entity::group_participant::Model)` - Created participant record
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let participant = create_participant(&db, session.id, user.id).await?;
/// ```
pub async fn create_participant(
    db: &DatabaseConnection,
    group_session_id: i32,
    user_id: i32,
) -> Result<entity::group_participant::Model, DbErr> {
    entity::group_participant::ActiveModel {
        group_session_id: ActiveValue::Set(group_session_id),
        user_id: ActiveValue::Set(user_id),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
