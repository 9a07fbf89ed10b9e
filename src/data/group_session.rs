use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::group::{
        CreateGroupSessionParams, GroupSession, GroupSessionStatus, GroupSessionWithCount,
    },
};

pub struct GroupSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group session in the scheduled state
    pub async fn create(&self, params: CreateGroupSessionParams) -> Result<GroupSession, AppError> {
        let session = entity::group_session::ActiveModel {
            host_id: ActiveValue::Set(params.host_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            max_participants: ActiveValue::Set(params.max_participants),
            status: ActiveValue::Set(GroupSessionStatus::Scheduled.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GroupSession::from_entity(session)
    }

    /// Gets a group session by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<GroupSession>, AppError> {
        let session = entity::prelude::GroupSession::find_by_id(id)
            .one(self.db)
            .await?;

        session.map(GroupSession::from_entity).transpose()
    }

    /// Gets paginated scheduled sessions, soonest first, each with its
    /// participant count
    pub async fn get_upcoming_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<GroupSessionWithCount>, u64), AppError> {
        let paginator = entity::prelude::GroupSession::find()
            .filter(
                entity::group_session::Column::Status.eq(GroupSessionStatus::Scheduled.as_str()),
            )
            .order_by_asc(entity::group_session::Column::ScheduledAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let sessions = paginator.fetch_page(page).await?;

        let mut results = Vec::with_capacity(sessions.len());

        for session in sessions {
            let participant_count = entity::prelude::GroupParticipant::find()
                .filter(entity::group_participant::Column::GroupSessionId.eq(session.id))
                .count(self.db)
                .await?;

            results.push(GroupSessionWithCount {
                session: GroupSession::from_entity(session)?,
                participant_count,
            });
        }

        Ok((results, total))
    }

    /// Sets a session's lifecycle status
    pub async fn update_status(
        &self,
        id: i32,
        status: GroupSessionStatus,
    ) -> Result<GroupSession, AppError> {
        let session = entity::prelude::GroupSession::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Group session with id {} not found",
                id
            )))?;

        let mut active_model: entity::group_session::ActiveModel = session.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active_model.update(self.db).await?;

        GroupSession::from_entity(updated)
    }
}
