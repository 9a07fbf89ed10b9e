//! Group session domain models and parameters.
//!
//! Group sessions move through the lifecycle scheduled, in progress, completed,
//! with cancellation allowed only while still scheduled. The host is always a
//! participant and drives every lifecycle transition.

use chrono::{DateTime, Utc};

use crate::{
    dto::group::{CreateGroupSessionDto, GroupSessionDto, PaginatedGroupSessionsDto},
    error::AppError,
};

/// Lifecycle status of a group session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSessionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl GroupSessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses the stored status string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(Self::Scheduled),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A scheduled group meditation session.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSession {
    pub id: i32,
    /// User who created the session and controls its lifecycle.
    pub host_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub status: GroupSessionStatus,
    pub created_at: DateTime<Utc>,
}

impl GroupSession {
    /// Converts an entity model to a group session domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GroupSession)` - The converted session
    /// - `Err(AppError::InternalError)` - Stored status string is not a known status
    pub fn from_entity(entity: entity::group_session::Model) -> Result<Self, AppError> {
        let status = GroupSessionStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown group session status '{}' for session {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            host_id: entity.host_id,
            title: entity.title,
            description: entity.description,
            scheduled_at: entity.scheduled_at,
            duration_minutes: entity.duration_minutes,
            max_participants: entity.max_participants,
            status,
            created_at: entity.created_at,
        })
    }

    /// Converts the session plus its participant count to a DTO for API responses.
    pub fn into_dto(self, participant_count: u64) -> GroupSessionDto {
        GroupSessionDto {
            id: self.id,
            host_id: self.host_id,
            title: self.title,
            description: self.description,
            scheduled_at: self.scheduled_at,
            duration_minutes: self.duration_minutes,
            max_participants: self.max_participants,
            status: self.status.as_str().to_string(),
            participant_count,
            created_at: self.created_at,
        }
    }
}

/// A group session paired with its current participant count.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSessionWithCount {
    pub session: GroupSession,
    pub participant_count: u64,
}

impl GroupSessionWithCount {
    pub fn into_dto(self) -> GroupSessionDto {
        self.session.into_dto(self.participant_count)
    }
}

/// Parameters for creating a group session.
#[derive(Debug, Clone)]
pub struct CreateGroupSessionParams {
    pub host_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub max_participants: i32,
}

impl CreateGroupSessionParams {
    pub fn from_dto(host_id: i32, dto: CreateGroupSessionDto) -> Self {
        Self {
            host_id,
            title: dto.title,
            description: dto.description,
            scheduled_at: dto.scheduled_at,
            duration_minutes: dto.duration_minutes,
            max_participants: dto.max_participants,
        }
    }
}

/// Paginated collection of upcoming group sessions with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedGroupSessions {
    pub sessions: Vec<GroupSessionWithCount>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedGroupSessions {
    /// Converts the paginated sessions domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedGroupSessionsDto {
        PaginatedGroupSessionsDto {
            sessions: self.sessions.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
