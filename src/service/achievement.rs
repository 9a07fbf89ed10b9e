use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        achievement::AchievementRepository, meditation_session::MeditationSessionRepository,
        stress_assessment::StressAssessmentRepository, user::UserRepository,
        user_achievement::UserAchievementRepository,
    },
    error::AppError,
    model::achievement::{
        Achievement, AchievementCategory, ActivityEvent, ActivityKind, CreateAchievementParams,
        UpdateAchievementParams, UserAchievementStatus,
    },
};

pub mod progress;

pub struct AchievementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all achievement definitions
    pub async fn get_all(&self) -> Result<Vec<Achievement>, AppError> {
        let achievements = AchievementRepository::new(self.db).get_all().await?;

        Ok(achievements)
    }

    /// Creates a new achievement definition
    pub async fn create(&self, params: CreateAchievementParams) -> Result<Achievement, AppError> {
        validate_category(&params.category)?;
        validate_criteria_value(params.criteria_value)?;
        validate_points(params.points)?;

        let achievement = AchievementRepository::new(self.db).create(params).await?;

        Ok(achievement)
    }

    /// Updates an achievement definition
    pub async fn update(&self, params: UpdateAchievementParams) -> Result<Achievement, AppError> {
        if let Some(category) = &params.category {
            validate_category(category)?;
        }

        if let Some(criteria_value) = params.criteria_value {
            validate_criteria_value(criteria_value)?;
        }

        if let Some(points) = params.points {
            validate_points(points)?;
        }

        let repo = AchievementRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Achievement with id {} not found",
                params.id
            )));
        }

        let achievement = repo.update(params).await?;

        Ok(achievement)
    }

    /// Deletes an achievement definition and all progress toward it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AchievementRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Achievement with id {} not found",
                id
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Gets the current user's progress records joined with definitions
    pub async fn get_user_achievements(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserAchievementStatus>, AppError> {
        let statuses = UserAchievementRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(statuses)
    }

    /// Sums the points of the user's completed achievements
    pub async fn total_points(&self, user_id: i32) -> Result<i64, AppError> {
        let total = UserAchievementRepository::new(self.db)
            .total_points(user_id)
            .await?;

        Ok(total)
    }

    /// Advances achievement progress for one activity event.
    ///
    /// Every achievement tracking the event's activity type is re-evaluated.
    /// Already-completed records are skipped, progress never decreases, and
    /// completion is a one-way transition stamping `date_earned` exactly once.
    pub async fn process_activity(
        &self,
        user_id: i32,
        event: ActivityEvent,
    ) -> Result<(), AppError> {
        let achievements = AchievementRepository::new(self.db)
            .get_by_criteria_type(event.kind.as_str())
            .await?;

        if achievements.is_empty() {
            return Ok(());
        }

        let user_achievement_repo = UserAchievementRepository::new(self.db);

        for achievement in achievements {
            let existing = user_achievement_repo
                .find_by_user_and_achievement(user_id, achievement.id)
                .await?;

            if existing.as_ref().is_some_and(|record| record.is_completed) {
                continue;
            }

            let existing_progress = existing.as_ref().map(|record| record.progress).unwrap_or(0);

            let category = AchievementCategory::parse(&achievement.category).ok_or_else(|| {
                AppError::InternalError(format!(
                    "Unknown category '{}' for achievement {}",
                    achievement.category, achievement.id
                ))
            })?;

            let computed = match category {
                AchievementCategory::Count => {
                    let count = self.activity_count(user_id, &event).await?;

                    Some(progress::from_ratio(
                        count,
                        achievement.criteria_value as i64,
                    ))
                }
                AchievementCategory::Duration => {
                    let total_seconds = MeditationSessionRepository::new(self.db)
                        .total_completed_seconds_by_user(user_id)
                        .await?;

                    Some(progress::from_ratio(
                        total_seconds,
                        achievement.criteria_value as i64 * 60,
                    ))
                }
                AchievementCategory::Streak => event
                    .streak
                    .map(|streak| progress::from_ratio(streak as i64, achievement.criteria_value as i64)),
                AchievementCategory::Milestone => event
                    .value
                    .and_then(|value| (value >= achievement.criteria_value as f64).then_some(100)),
            };

            let new_progress = progress::resolve(existing_progress, computed);
            let is_completed = new_progress >= 100;
            let date_earned = is_completed.then(Utc::now);

            user_achievement_repo
                .upsert_progress(user_id, achievement.id, new_progress, is_completed, date_earned)
                .await?;
        }

        Ok(())
    }

    /// Current occurrence count for a count-category achievement
    async fn activity_count(&self, user_id: i32, event: &ActivityEvent) -> Result<i64, AppError> {
        let count = match event.kind {
            ActivityKind::MeditationCompleted => MeditationSessionRepository::new(self.db)
                .count_completed_by_user(user_id)
                .await? as i64,
            ActivityKind::StressAssessmentCompleted => StressAssessmentRepository::new(self.db)
                .count_by_user(user_id)
                .await? as i64,
            ActivityKind::Login => UserRepository::new(self.db)
                .find_by_id(user_id)
                .await?
                .map(|user| user.login_count as i64)
                .unwrap_or(0),
            ActivityKind::Streak => event.streak.unwrap_or(0) as i64,
        };

        Ok(count)
    }
}

fn validate_category(category: &str) -> Result<(), AppError> {
    if AchievementCategory::parse(category).is_none() {
        return Err(AppError::BadRequest(format!(
            "Category must be one of count, duration, streak, milestone, got '{}'",
            category
        )));
    }

    Ok(())
}

fn validate_criteria_value(criteria_value: i32) -> Result<(), AppError> {
    if criteria_value <= 0 {
        return Err(AppError::BadRequest(
            "Criteria value must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_points(points: i32) -> Result<(), AppError> {
    if points < 0 {
        return Err(AppError::BadRequest(
            "Points must not be negative".to_string(),
        ));
    }

    Ok(())
}
