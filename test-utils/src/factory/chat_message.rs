//! Chat message factory for creating test chat messages.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a chat message in a group session.
///
/// The content defaults to a unique `"Message {id}"` string.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_session_id` - Session the message belongs to
/// - `user_id` - Authoring user id
///
/// # Returns
/// - `Ok(entity::chat_message::Model)` - Created message
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    group_session_id: i32,
    user_id: i32,
) -> Result<entity::chat_message::Model, DbErr> {
    create_message_with_content(db, group_session_id, user_id, format!("Message {}", next_id()))
        .await
}

/// Creates a chat message with specific content.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_session_id` - Session the message belongs to
/// - `user_id` - Authoring user id
/// - `content` - Message text
///
/// # Returns
/// - `Ok(entity::chat_message::Model)` - Created message
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message_with_content(
    db: &DatabaseConnection,
    group_session_id: i32,
    user_id: i32,
    content: impl Into<String>,
) -> Result<entity::chat_message::Model, DbErr> {
    entity::chat_message::ActiveModel {
        group_session_id: ActiveValue::Set(group_session_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(content.into()),
        sent_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
