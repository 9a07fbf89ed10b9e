use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::meditation::{
    CreateMeditationSessionParams, MeditationSession, UpdateMeditationSessionParams,
};

pub struct MeditationSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeditationSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new meditation session in the not-completed state
    pub async fn create(
        &self,
        params: CreateMeditationSessionParams,
    ) -> Result<MeditationSession, DbErr> {
        let session = entity::meditation_session::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            session_type: ActiveValue::Set(params.session_type),
            duration_seconds: ActiveValue::Set(params.duration_seconds),
            started_at: ActiveValue::Set(params.started_at),
            ended_at: ActiveValue::Set(None),
            completed: ActiveValue::Set(false),
            mood_before: ActiveValue::Set(params.mood_before),
            mood_after: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MeditationSession::from_entity(session))
    }

    /// Gets a meditation session by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MeditationSession>, DbErr> {
        let session = entity::prelude::MeditationSession::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(session.map(MeditationSession::from_entity))
    }

    /// Gets the user's active (not yet completed) session, if any
    pub async fn find_active_by_user(&self, user_id: i32) -> Result<Option<MeditationSession>, DbErr> {
        let session = entity::prelude::MeditationSession::find()
            .filter(entity::meditation_session::Column::UserId.eq(user_id))
            .filter(entity::meditation_session::Column::Completed.eq(false))
            .one(self.db)
            .await?;

        Ok(session.map(MeditationSession::from_entity))
    }

    /// Gets paginated sessions for a user, newest first, optionally bounded
    /// by a start-time range
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<(Vec<MeditationSession>, u64), DbErr> {
        let mut query = entity::prelude::MeditationSession::find()
            .filter(entity::meditation_session::Column::UserId.eq(user_id));

        if let Some(from) = from {
            query = query.filter(entity::meditation_session::Column::StartedAt.gte(from));
        }

        if let Some(to) = to {
            query = query.filter(entity::meditation_session::Column::StartedAt.lte(to));
        }

        let paginator = query
            .order_by_desc(entity::meditation_session::Column::StartedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let sessions = paginator.fetch_page(page).await?;

        Ok((
            sessions
                .into_iter()
                .map(MeditationSession::from_entity)
                .collect(),
            total,
        ))
    }

    /// Gets all sessions for a user in an optional start-time range, oldest
    /// first
    pub async fn get_by_user_in_range(
        &self,
        user_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<MeditationSession>, DbErr> {
        let mut query = entity::prelude::MeditationSession::find()
            .filter(entity::meditation_session::Column::UserId.eq(user_id));

        if let Some(from) = from {
            query = query.filter(entity::meditation_session::Column::StartedAt.gte(from));
        }

        if let Some(to) = to {
            query = query.filter(entity::meditation_session::Column::StartedAt.lte(to));
        }

        let sessions = query
            .order_by_asc(entity::meditation_session::Column::StartedAt)
            .all(self.db)
            .await?;

        Ok(sessions
            .into_iter()
            .map(MeditationSession::from_entity)
            .collect())
    }

    /// Updates a session's editable fields, leaving `None` fields unchanged
    pub async fn update(
        &self,
        params: UpdateMeditationSessionParams,
    ) -> Result<MeditationSession, DbErr> {
        let session = entity::prelude::MeditationSession::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Meditation session with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::meditation_session::ActiveModel = session.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }

        if let Some(session_type) = params.session_type {
            active_model.session_type = ActiveValue::Set(session_type);
        }

        if let Some(duration_seconds) = params.duration_seconds {
            active_model.duration_seconds = ActiveValue::Set(duration_seconds);
        }

        if let Some(mood_before) = params.mood_before {
            active_model.mood_before = ActiveValue::Set(Some(mood_before));
        }

        let updated = active_model.update(self.db).await?;

        Ok(MeditationSession::from_entity(updated))
    }

    /// Marks a session completed, setting the end time and optional after-mood
    pub async fn complete(
        &self,
        id: i32,
        ended_at: DateTime<Utc>,
        mood_after: Option<i32>,
    ) -> Result<MeditationSession, DbErr> {
        let session = entity::prelude::MeditationSession::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Meditation session with id {} not found",
                id
            )))?;

        let mut active_model: entity::meditation_session::ActiveModel = session.into();
        active_model.ended_at = ActiveValue::Set(Some(ended_at));
        active_model.completed = ActiveValue::Set(true);

        if let Some(mood_after) = mood_after {
            active_model.mood_after = ActiveValue::Set(Some(mood_after));
        }

        let updated = active_model.update(self.db).await?;

        Ok(MeditationSession::from_entity(updated))
    }

    /// Deletes a meditation session
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MeditationSession::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the user's completed sessions
    pub async fn count_completed_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MeditationSession::find()
            .filter(entity::meditation_session::Column::UserId.eq(user_id))
            .filter(entity::meditation_session::Column::Completed.eq(true))
            .count(self.db)
            .await
    }

    /// Sums the planned duration of the user's completed sessions, in seconds
    pub async fn total_completed_seconds_by_user(&self, user_id: i32) -> Result<i64, DbErr> {
        let sessions = entity::prelude::MeditationSession::find()
            .filter(entity::meditation_session::Column::UserId.eq(user_id))
            .filter(entity::meditation_session::Column::Completed.eq(true))
            .all(self.db)
            .await?;

        Ok(sessions.iter().map(|s| s.duration_seconds as i64).sum())
    }

    /// Gets the start times of the user's completed sessions, newest first
    ///
    /// Used for consecutive-day streak computation.
    pub async fn completed_started_at_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<DateTime<Utc>>, DbErr> {
        let rows: Vec<DateTime<Utc>> = entity::prelude::MeditationSession::find()
            .filter(entity::meditation_session::Column::UserId.eq(user_id))
            .filter(entity::meditation_session::Column::Completed.eq(true))
            .order_by_desc(entity::meditation_session::Column::StartedAt)
            .select_only()
            .column(entity::meditation_session::Column::StartedAt)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows)
    }
}
