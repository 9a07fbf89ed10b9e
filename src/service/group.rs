use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{group_participant::GroupParticipantRepository, group_session::GroupSessionRepository},
    error::AppError,
    model::group::{
        CreateGroupSessionParams, GroupSession, GroupSessionStatus, GroupSessionWithCount,
        PaginatedGroupSessions,
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group session hosted by the current user.
    ///
    /// The host is enrolled as the first participant.
    ///
    /// # Returns
    /// - `Ok(GroupSessionWithCount)` - The created session with its count
    /// - `Err(AppError::BadRequest)` - Schedule in the past, too few seats, or
    ///   non-positive duration
    pub async fn create(
        &self,
        params: CreateGroupSessionParams,
    ) -> Result<GroupSessionWithCount, AppError> {
        if params.scheduled_at <= Utc::now() {
            return Err(AppError::BadRequest(
                "Scheduled time must be in the future".to_string(),
            ));
        }

        if params.max_participants < 2 {
            return Err(AppError::BadRequest(
                "Group sessions need room for at least 2 participants".to_string(),
            ));
        }

        if params.duration_minutes <= 0 {
            return Err(AppError::BadRequest(
                "Duration must be greater than zero".to_string(),
            ));
        }

        let host_id = params.host_id;

        let session = GroupSessionRepository::new(self.db).create(params).await?;

        GroupParticipantRepository::new(self.db)
            .add(session.id, host_id)
            .await?;

        Ok(GroupSessionWithCount {
            session,
            participant_count: 1,
        })
    }

    /// Gets a group session with its participant count
    pub async fn get_by_id(&self, id: i32) -> Result<GroupSessionWithCount, AppError> {
        let session = self.find_session(id).await?;

        let participant_count = GroupParticipantRepository::new(self.db)
            .count_by_session(id)
            .await?;

        Ok(GroupSessionWithCount {
            session,
            participant_count,
        })
    }

    /// Gets paginated upcoming sessions, soonest first
    pub async fn get_upcoming_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedGroupSessions, AppError> {
        let (sessions, total) = GroupSessionRepository::new(self.db)
            .get_upcoming_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedGroupSessions {
            sessions,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Adds the current user to a session.
    ///
    /// # Returns
    /// - `Ok(GroupSessionWithCount)` - The session after joining
    /// - `Err(AppError::Conflict)` - Session full, already joined, or no
    ///   longer joinable
    pub async fn join(&self, id: i32, user_id: i32) -> Result<GroupSessionWithCount, AppError> {
        let session = self.find_session(id).await?;

        if session.status != GroupSessionStatus::Scheduled {
            return Err(AppError::Conflict(
                "Group session is no longer accepting participants".to_string(),
            ));
        }

        let participant_repo = GroupParticipantRepository::new(self.db);

        if participant_repo.is_participant(id, user_id).await? {
            return Err(AppError::Conflict(
                "Already joined this group session".to_string(),
            ));
        }

        let participant_count = participant_repo.count_by_session(id).await?;

        if participant_count >= session.max_participants as u64 {
            return Err(AppError::Conflict("Group session is full".to_string()));
        }

        participant_repo.add(id, user_id).await?;

        Ok(GroupSessionWithCount {
            session,
            participant_count: participant_count + 1,
        })
    }

    /// Removes the current user from a session.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Not a participant of this session
    /// - `Err(AppError::Conflict)` - The host cannot leave their own session
    pub async fn leave(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let session = self.find_session(id).await?;

        if session.host_id == user_id {
            return Err(AppError::Conflict(
                "The host cannot leave their own session, cancel it instead".to_string(),
            ));
        }

        let participant_repo = GroupParticipantRepository::new(self.db);

        if !participant_repo.is_participant(id, user_id).await? {
            return Err(AppError::NotFound(
                "Not a participant of this group session".to_string(),
            ));
        }

        participant_repo.remove(id, user_id).await?;

        Ok(())
    }

    /// Cancels a scheduled session.
    ///
    /// # Access Control
    /// Host only.
    pub async fn cancel(&self, id: i32, user_id: i32) -> Result<GroupSession, AppError> {
        self.transition(
            id,
            user_id,
            GroupSessionStatus::Scheduled,
            GroupSessionStatus::Cancelled,
        )
        .await
    }

    /// Starts a scheduled session.
    ///
    /// # Access Control
    /// Host only.
    pub async fn start(&self, id: i32, user_id: i32) -> Result<GroupSession, AppError> {
        self.transition(
            id,
            user_id,
            GroupSessionStatus::Scheduled,
            GroupSessionStatus::InProgress,
        )
        .await
    }

    /// Completes an in-progress session.
    ///
    /// # Access Control
    /// Host only.
    pub async fn complete(&self, id: i32, user_id: i32) -> Result<GroupSession, AppError> {
        self.transition(
            id,
            user_id,
            GroupSessionStatus::InProgress,
            GroupSessionStatus::Completed,
        )
        .await
    }

    /// Moves a session through one lifecycle step, host only, valid
    /// transitions only
    async fn transition(
        &self,
        id: i32,
        user_id: i32,
        expected: GroupSessionStatus,
        next: GroupSessionStatus,
    ) -> Result<GroupSession, AppError> {
        let session = self.find_session(id).await?;

        if session.host_id != user_id {
            return Err(AppError::Forbidden(
                "Only the host can manage this group session".to_string(),
            ));
        }

        if session.status != expected {
            return Err(AppError::Conflict(format!(
                "Group session is {}, expected {}",
                session.status.as_str(),
                expected.as_str()
            )));
        }

        let session = GroupSessionRepository::new(self.db)
            .update_status(id, next)
            .await?;

        Ok(session)
    }

    async fn find_session(&self, id: i32) -> Result<GroupSession, AppError> {
        GroupSessionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group session with id {} not found", id)))
    }
}
