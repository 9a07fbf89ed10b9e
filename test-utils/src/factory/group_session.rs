//! Group session factory for creating test group session entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test group sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group_session::GroupSessionFactory;
///
/// let session = GroupSessionFactory::new(&db, host.id)
///     .max_participants(2)
///     .status("in_progress")
///     .build()
///     .await?;
/// ```
pub struct GroupSessionFactory<'a> {
    db: &'a DatabaseConnection,
    host_id: i32,
    title: String,
    description: Option<String>,
    scheduled_at: DateTime<Utc>,
    duration_minutes: i32,
    max_participants: i32,
    status: String,
}

impl<'a> GroupSessionFactory<'a> {
    /// Creates a new GroupSessionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Group Session {id}"` where id is auto-incremented
    /// - description: `None`
    /// - scheduled_at: one day from now
    /// - duration_minutes: `30`
    /// - max_participants: `10`
    /// - status: `"scheduled"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `host_id` - Hosting user id
    pub fn new(db: &'a DatabaseConnection, host_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            host_id,
            title: format!("Group Session {}", id),
            description: None,
            scheduled_at: Utc::now() + Duration::days(1),
            duration_minutes: 30,
            max_participants: 10,
            status: "scheduled".to_string(),
        }
    }

    /// Sets the session title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the scheduled start time.
    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Sets the participant capacity.
    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Sets the lifecycle status, one of `scheduled`, `in_progress`, `completed`,
    /// or `cancelled`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the group session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group_session::Model, DbErr> {
        entity::group_session::ActiveModel {
            host_id: ActiveValue::Set(self.host_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            max_participants: ActiveValue::Set(self.max_participants),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled group session with default values.
///
/// Shorthand for `GroupSessionFactory::new(db, host_id).build().await`.
///
/// Note that this does not enroll the host as a participant. Use
/// `helpers::create_group_session_with_host` when the host must be enrolled.
///
/// # Arguments
/// - `db` - Database connection
/// - `host_id` - Hosting user id
///
/// # Returns
/// - `Ok(entity::group_session::Model)` - Created session entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group_session(
    db: &DatabaseConnection,
    host_id: i32,
) -> Result<entity::group_session::Model, DbErr> {
    GroupSessionFactory::new(db, host_id).build().await
}
