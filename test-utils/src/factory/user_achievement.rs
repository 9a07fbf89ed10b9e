//! User achievement factory for creating test progress records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user achievement progress records.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_achievement::UserAchievementFactory;
///
/// let record = UserAchievementFactory::new(&db, user.id, achievement.id)
///     .progress(100)
///     .completed(true)
///     .build()
///     .await?;
/// ```
pub struct UserAchievementFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    achievement_id: i32,
    progress: i32,
    is_completed: bool,
    date_earned: Option<DateTime<Utc>>,
}

impl<'a> UserAchievementFactory<'a> {
    /// Creates a new UserAchievementFactory with default values.
    ///
    /// Defaults:
    /// - progress: `0`
    /// - is_completed: `false`
    /// - date_earned: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    /// - `achievement_id` - Achievement definition id
    pub fn new(db: &'a DatabaseConnection, user_id: i32, achievement_id: i32) -> Self {
        Self {
            db,
            user_id,
            achievement_id,
            progress: 0,
            is_completed: false,
            date_earned: None,
        }
    }

    /// Sets the progress percentage.
    pub fn progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// Marks the record completed, setting the earned date to now.
    pub fn completed(mut self, completed: bool) -> Self {
        self.is_completed = completed;
        if completed && self.date_earned.is_none() {
            self.date_earned = Some(Utc::now());
        }
        self
    }

    /// Builds and inserts the user achievement entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_achievement::Model)` - Created progress record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_achievement::Model, DbErr> {
        let now = Utc::now();
        entity::user_achievement::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            achievement_id: ActiveValue::Set(self.achievement_id),
            progress: ActiveValue::Set(self.progress),
            is_completed: ActiveValue::Set(self.is_completed),
            date_earned: ActiveValue::Set(self.date_earned),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user achievement progress record with default values.
///
/// Shorthand for `UserAchievementFactory::new(db, user_id, achievement_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
/// - `achievement_id` - Achievement definition id
///
/// # Returns
/// - `Ok(entity::user_achievement::Model)` - Created progress record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_achievement(
    db: &DatabaseConnection,
    user_id: i32,
    achievement_id: i32,
) -> Result<entity::user_achievement::Model, DbErr> {
    UserAchievementFactory::new(db, user_id, achievement_id)
        .build()
        .await
}
