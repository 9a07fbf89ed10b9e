//! Stress assessment factory for creating test assessment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stress assessments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::stress_assessment::StressAssessmentFactory;
///
/// let assessment = StressAssessmentFactory::new(&db, user.id)
///     .score(8)
///     .triggers(vec!["work", "deadlines"])
///     .build()
///     .await?;
/// ```
pub struct StressAssessmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    score: i32,
    physical_score: i32,
    emotional_score: i32,
    behavioral_score: i32,
    cognitive_score: i32,
    triggers: Vec<String>,
    symptoms: Vec<String>,
    recorded_at: DateTime<Utc>,
}

impl<'a> StressAssessmentFactory<'a> {
    /// Creates a new StressAssessmentFactory with default values.
    ///
    /// Defaults:
    /// - all scores: `5`
    /// - triggers: `["work"]`
    /// - symptoms: `["tension"]`
    /// - recorded_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            score: 5,
            physical_score: 5,
            emotional_score: 5,
            behavioral_score: 5,
            cognitive_score: 5,
            triggers: vec!["work".to_string()],
            symptoms: vec!["tension".to_string()],
            recorded_at: Utc::now(),
        }
    }

    /// Sets the overall stress score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Sets the reported triggers.
    pub fn triggers(mut self, triggers: Vec<impl Into<String>>) -> Self {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the reported symptoms.
    pub fn symptoms(mut self, symptoms: Vec<impl Into<String>>) -> Self {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the recorded time.
    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// Builds and inserts the stress assessment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::stress_assessment::Model)` - Created assessment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::stress_assessment::Model, DbErr> {
        entity::stress_assessment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            score: ActiveValue::Set(self.score),
            physical_score: ActiveValue::Set(self.physical_score),
            emotional_score: ActiveValue::Set(self.emotional_score),
            behavioral_score: ActiveValue::Set(self.behavioral_score),
            cognitive_score: ActiveValue::Set(self.cognitive_score),
            triggers: ActiveValue::Set(serde_json::json!(self.triggers)),
            symptoms: ActiveValue::Set(serde_json::json!(self.symptoms)),
            recorded_at: ActiveValue::Set(self.recorded_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stress assessment with default values.
///
/// Shorthand for `StressAssessmentFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
///
/// # Returns
/// - `Ok(entity::stress_assessment::Model)` - Created assessment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_assessment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::stress_assessment::Model, DbErr> {
    StressAssessmentFactory::new(db, user_id).build().await
}

/// Creates a stress assessment with a specific overall score.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
/// - `score` - Overall stress score
///
/// # Returns
/// - `Ok(entity::stress_assessment::Model)` - Created assessment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_assessment_with_score(
    db: &DatabaseConnection,
    user_id: i32,
    score: i32,
) -> Result<entity::stress_assessment::Model, DbErr> {
    StressAssessmentFactory::new(db, user_id)
        .score(score)
        .build()
        .await
}
