//! Achievement factory for creating test achievement definitions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test achievement definitions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::achievement::AchievementFactory;
///
/// let achievement = AchievementFactory::new(&db)
///     .category("duration")
///     .criteria_value(30)
///     .points(50)
///     .build()
///     .await?;
/// ```
pub struct AchievementFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    category: String,
    criteria_type: String,
    criteria_value: i32,
    icon: String,
    points: i32,
}

impl<'a> AchievementFactory<'a> {
    /// Creates a new AchievementFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Achievement {id}"` where id is auto-incremented
    /// - description: `"Test achievement {id}"`
    /// - category: `"count"`
    /// - criteria_type: `"meditation_completed"`
    /// - criteria_value: `5`
    /// - icon: `"star"`
    /// - points: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Achievement {}", id),
            description: format!("Test achievement {}", id),
            category: "count".to_string(),
            criteria_type: "meditation_completed".to_string(),
            criteria_value: 5,
            icon: "star".to_string(),
            points: 10,
        }
    }

    /// Sets the name for the achievement.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the progress category, one of `count`, `duration`, `streak`, or `milestone`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the activity type the achievement tracks.
    pub fn criteria_type(mut self, criteria_type: impl Into<String>) -> Self {
        self.criteria_type = criteria_type.into();
        self
    }

    /// Sets the criteria target value.
    pub fn criteria_value(mut self, criteria_value: i32) -> Self {
        self.criteria_value = criteria_value;
        self
    }

    /// Sets the points awarded on completion.
    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Builds and inserts the achievement entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::achievement::Model)` - Created achievement entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::achievement::Model, DbErr> {
        entity::achievement::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            criteria_type: ActiveValue::Set(self.criteria_type),
            criteria_value: ActiveValue::Set(self.criteria_value),
            icon: ActiveValue::Set(self.icon),
            points: ActiveValue::Set(self.points),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an achievement definition with default values.
///
/// Shorthand for `AchievementFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::achievement::Model)` - Created achievement entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_achievement(
    db: &DatabaseConnection,
) -> Result<entity::achievement::Model, DbErr> {
    AchievementFactory::new(db).build().await
}
