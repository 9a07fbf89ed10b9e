use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::stress_assessment::StressAssessmentRepository,
    error::AppError,
    model::{
        achievement::{ActivityEvent, ActivityKind},
        stress::{
            CreateStressAssessmentParams, PaginatedStressAssessments, StressAssessment,
            StressInsights,
        },
    },
    service::achievement::AchievementService,
};

pub mod analysis;

/// Default analysis window when no range is given, in days.
const DEFAULT_INSIGHTS_WINDOW_DAYS: i64 = 30;

/// Default number of entries in each top-N insights list.
pub const DEFAULT_INSIGHTS_TOP: usize = 3;

pub struct StressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new stress assessment.
    ///
    /// Fires a `stress_assessment_completed` activity event whose value is the
    /// percentage score reduction against the user's previous assessment, for
    /// milestone achievements tracking improvement.
    ///
    /// # Returns
    /// - `Ok(StressAssessment)` - The created assessment
    /// - `Err(AppError::BadRequest)` - A score is outside 0 to 10
    pub async fn create(
        &self,
        params: CreateStressAssessmentParams,
    ) -> Result<StressAssessment, AppError> {
        validate_score("Score", params.score)?;
        validate_score("Physical score", params.physical_score)?;
        validate_score("Emotional score", params.emotional_score)?;
        validate_score("Behavioral score", params.behavioral_score)?;
        validate_score("Cognitive score", params.cognitive_score)?;

        let repo = StressAssessmentRepository::new(self.db);

        let previous = repo
            .find_previous(params.user_id, params.recorded_at)
            .await?;

        let assessment = repo.create(params).await?;

        let reduction = previous
            .map(|p| score_reduction_percent(p.score, assessment.score))
            .unwrap_or(0.0);

        AchievementService::new(self.db)
            .process_activity(
                assessment.user_id,
                ActivityEvent::with_value(ActivityKind::StressAssessmentCompleted, reduction),
            )
            .await?;

        Ok(assessment)
    }

    /// Gets one of the user's assessments.
    ///
    /// # Returns
    /// - `Ok(StressAssessment)` - The assessment
    /// - `Err(AppError::NotFound)` - No assessment with this id
    /// - `Err(AppError::Forbidden)` - The assessment belongs to another user
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<StressAssessment, AppError> {
        let assessment = StressAssessmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Stress assessment with id {} not found", id))
            })?;

        if assessment.user_id != user_id {
            return Err(AppError::Forbidden(
                "Stress assessment belongs to another user".to_string(),
            ));
        }

        Ok(assessment)
    }

    /// Gets paginated assessments for the user, newest first, optionally
    /// bounded by a recorded-time range
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<PaginatedStressAssessments, AppError> {
        let (assessments, total) = StressAssessmentRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page, from, to)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedStressAssessments {
            assessments,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Deletes one of the user's assessments
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.get_by_id(id, user_id).await?;

        StressAssessmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Analyzes the user's assessments over a window.
    ///
    /// The window defaults to the last 30 days and the top-N lists default to
    /// three entries.
    pub async fn insights(
        &self,
        user_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        top: Option<usize>,
    ) -> Result<StressInsights, AppError> {
        let from = from.unwrap_or_else(|| Utc::now() - Duration::days(DEFAULT_INSIGHTS_WINDOW_DAYS));
        let top = top.unwrap_or(DEFAULT_INSIGHTS_TOP);

        let assessments = StressAssessmentRepository::new(self.db)
            .get_by_user_in_range(user_id, Some(from), to)
            .await?;

        let average_score = analysis::average_score(&assessments);
        let trend = analysis::trend(&assessments);

        let common_triggers = analysis::top_frequencies(
            assessments.iter().flat_map(|a| a.triggers.iter().cloned()),
            top,
        );
        let common_symptoms = analysis::top_frequencies(
            assessments.iter().flat_map(|a| a.symptoms.iter().cloned()),
            top,
        );

        let peak_hours = analysis::peak_hours(&assessments, top);

        let insights = analysis::summaries(average_score, trend, &common_triggers, &peak_hours);

        Ok(StressInsights {
            average_score,
            trend,
            common_triggers,
            common_symptoms,
            peak_hours,
            insights,
        })
    }
}

/// Percentage reduction from the previous score, zero when not improved.
fn score_reduction_percent(previous: i32, current: i32) -> f64 {
    if previous <= 0 || current >= previous {
        return 0.0;
    }

    (previous - current) as f64 / previous as f64 * 100.0
}

fn validate_score(name: &str, score: i32) -> Result<(), AppError> {
    if !(0..=10).contains(&score) {
        return Err(AppError::BadRequest(format!(
            "{} must be between 0 and 10",
            name
        )));
    }

    Ok(())
}
