use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::stress::{CreateStressAssessmentParams, StressAssessment},
};

pub struct StressAssessmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StressAssessmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new stress assessment, storing triggers and symptoms as JSON arrays
    pub async fn create(
        &self,
        params: CreateStressAssessmentParams,
    ) -> Result<StressAssessment, AppError> {
        let assessment = entity::stress_assessment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            score: ActiveValue::Set(params.score),
            physical_score: ActiveValue::Set(params.physical_score),
            emotional_score: ActiveValue::Set(params.emotional_score),
            behavioral_score: ActiveValue::Set(params.behavioral_score),
            cognitive_score: ActiveValue::Set(params.cognitive_score),
            triggers: ActiveValue::Set(serde_json::json!(params.triggers)),
            symptoms: ActiveValue::Set(serde_json::json!(params.symptoms)),
            recorded_at: ActiveValue::Set(params.recorded_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        StressAssessment::from_entity(assessment)
    }

    /// Gets a stress assessment by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<StressAssessment>, AppError> {
        let assessment = entity::prelude::StressAssessment::find_by_id(id)
            .one(self.db)
            .await?;

        assessment.map(StressAssessment::from_entity).transpose()
    }

    /// Gets paginated assessments for a user, newest first, optionally
    /// bounded by a recorded-time range
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<(Vec<StressAssessment>, u64), AppError> {
        let mut query = entity::prelude::StressAssessment::find()
            .filter(entity::stress_assessment::Column::UserId.eq(user_id));

        if let Some(from) = from {
            query = query.filter(entity::stress_assessment::Column::RecordedAt.gte(from));
        }

        if let Some(to) = to {
            query = query.filter(entity::stress_assessment::Column::RecordedAt.lte(to));
        }

        let paginator = query
            .order_by_desc(entity::stress_assessment::Column::RecordedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let assessments = paginator.fetch_page(page).await?;

        let assessments = assessments
            .into_iter()
            .map(StressAssessment::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((assessments, total))
    }

    /// Gets all assessments for a user in an optional recorded-time range,
    /// oldest first
    pub async fn get_by_user_in_range(
        &self,
        user_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<StressAssessment>, AppError> {
        let mut query = entity::prelude::StressAssessment::find()
            .filter(entity::stress_assessment::Column::UserId.eq(user_id));

        if let Some(from) = from {
            query = query.filter(entity::stress_assessment::Column::RecordedAt.gte(from));
        }

        if let Some(to) = to {
            query = query.filter(entity::stress_assessment::Column::RecordedAt.lte(to));
        }

        let assessments = query
            .order_by_asc(entity::stress_assessment::Column::RecordedAt)
            .all(self.db)
            .await?;

        assessments
            .into_iter()
            .map(StressAssessment::from_entity)
            .collect()
    }

    /// Gets the user's most recent assessment recorded strictly before the
    /// given time, if any
    pub async fn find_previous(
        &self,
        user_id: i32,
        before: DateTime<Utc>,
    ) -> Result<Option<StressAssessment>, AppError> {
        let assessment = entity::prelude::StressAssessment::find()
            .filter(entity::stress_assessment::Column::UserId.eq(user_id))
            .filter(entity::stress_assessment::Column::RecordedAt.lt(before))
            .order_by_desc(entity::stress_assessment::Column::RecordedAt)
            .one(self.db)
            .await?;

        assessment.map(StressAssessment::from_entity).transpose()
    }

    /// Counts the user's assessments
    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::StressAssessment::find()
            .filter(entity::stress_assessment::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Deletes a stress assessment
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::StressAssessment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
