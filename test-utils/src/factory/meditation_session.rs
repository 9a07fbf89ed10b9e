//! Meditation session factory for creating test session entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test meditation sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::meditation_session::MeditationSessionFactory;
///
/// let session = MeditationSessionFactory::new(&db, user.id)
///     .session_type("breathing")
///     .duration_seconds(300)
///     .completed(true)
///     .build()
///     .await?;
/// ```
pub struct MeditationSessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    session_type: String,
    duration_seconds: i32,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    completed: bool,
    mood_before: Option<i32>,
    mood_after: Option<i32>,
}

impl<'a> MeditationSessionFactory<'a> {
    /// Creates a new MeditationSessionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Session {id}"` where id is auto-incremented
    /// - session_type: `"guided"`
    /// - duration_seconds: `600`
    /// - started_at: now
    /// - completed: `false` with no end time or mood ratings
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Session {}", id),
            session_type: "guided".to_string(),
            duration_seconds: 600,
            started_at: Utc::now(),
            ended_at: None,
            completed: false,
            mood_before: None,
            mood_after: None,
        }
    }

    /// Sets the session type, one of `guided`, `unguided`, `breathing`, or `body_scan`.
    pub fn session_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = session_type.into();
        self
    }

    /// Sets the planned duration in seconds.
    pub fn duration_seconds(mut self, duration_seconds: i32) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the start time.
    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Marks the session completed, ending it at the start time plus duration.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        if completed && self.ended_at.is_none() {
            self.ended_at =
                Some(self.started_at + chrono::Duration::seconds(self.duration_seconds as i64));
        }
        self
    }

    /// Sets the mood rating before the session.
    pub fn mood_before(mut self, mood_before: i32) -> Self {
        self.mood_before = Some(mood_before);
        self
    }

    /// Sets the mood rating after the session.
    pub fn mood_after(mut self, mood_after: i32) -> Self {
        self.mood_after = Some(mood_after);
        self
    }

    /// Builds and inserts the meditation session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::meditation_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::meditation_session::Model, DbErr> {
        entity::meditation_session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            session_type: ActiveValue::Set(self.session_type),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
            completed: ActiveValue::Set(self.completed),
            mood_before: ActiveValue::Set(self.mood_before),
            mood_after: ActiveValue::Set(self.mood_after),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an in-progress meditation session with default values.
///
/// Shorthand for `MeditationSessionFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
///
/// # Returns
/// - `Ok(entity::meditation_session::Model)` - Created session entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::meditation_session::Model, DbErr> {
    MeditationSessionFactory::new(db, user_id).build().await
}

/// Creates a completed meditation session started at the given time.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
/// - `started_at` - Session start time
///
/// # Returns
/// - `Ok(entity::meditation_session::Model)` - Created session entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_completed_session(
    db: &DatabaseConnection,
    user_id: i32,
    started_at: DateTime<Utc>,
) -> Result<entity::meditation_session::Model, DbErr> {
    MeditationSessionFactory::new(db, user_id)
        .started_at(started_at)
        .completed(true)
        .build()
        .await
}
