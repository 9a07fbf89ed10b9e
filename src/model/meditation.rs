//! Meditation session domain models and parameters.
//!
//! A session is created when the user starts meditating and completed through
//! an explicit transition that sets the end time and optional after-mood.
//! At most one active (not completed) session exists per user at a time.

use chrono::{DateTime, Utc};

use crate::dto::meditation::{
    CreateMeditationSessionDto, MeditationSessionDto, PaginatedMeditationSessionsDto,
    UpdateMeditationSessionDto,
};

/// Session types accepted by create and update operations.
pub const SESSION_TYPES: [&str; 4] = ["guided", "unguided", "breathing", "body_scan"];

/// A single meditation session belonging to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct MeditationSession {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    /// One of the `SESSION_TYPES` values.
    pub session_type: String,
    /// Planned duration in seconds.
    pub duration_seconds: i32,
    pub started_at: DateTime<Utc>,
    /// Set when the session is completed.
    pub ended_at: Option<DateTime<Utc>>,
    pub completed: bool,
    /// Mood rating 1 to 10 before the session.
    pub mood_before: Option<i32>,
    /// Mood rating 1 to 10 after the session.
    pub mood_after: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl MeditationSession {
    /// Converts the session domain model to a DTO for API responses.
    pub fn into_dto(self) -> MeditationSessionDto {
        MeditationSessionDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            session_type: self.session_type,
            duration_seconds: self.duration_seconds,
            started_at: self.started_at,
            ended_at: self.ended_at,
            completed: self.completed,
            mood_before: self.mood_before,
            mood_after: self.mood_after,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a session domain model at the repository boundary.
    pub fn from_entity(entity: entity::meditation_session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            session_type: entity.session_type,
            duration_seconds: entity.duration_seconds,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            completed: entity.completed,
            mood_before: entity.mood_before,
            mood_after: entity.mood_after,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating (starting) a meditation session.
#[derive(Debug, Clone)]
pub struct CreateMeditationSessionParams {
    pub user_id: i32,
    pub title: String,
    pub session_type: String,
    pub duration_seconds: i32,
    pub started_at: DateTime<Utc>,
    pub mood_before: Option<i32>,
}

impl CreateMeditationSessionParams {
    /// Builds creation parameters from the request DTO.
    ///
    /// The start time defaults to now when the DTO omits it.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user starting the session
    /// - `dto` - Request payload
    pub fn from_dto(user_id: i32, dto: CreateMeditationSessionDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            session_type: dto.session_type,
            duration_seconds: dto.duration_seconds,
            started_at: dto.started_at.unwrap_or_else(Utc::now),
            mood_before: dto.mood_before,
        }
    }
}

/// Parameters for updating an existing session.
///
/// None fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateMeditationSessionParams {
    pub id: i32,
    pub title: Option<String>,
    pub session_type: Option<String>,
    pub duration_seconds: Option<i32>,
    pub mood_before: Option<i32>,
}

impl UpdateMeditationSessionParams {
    /// Builds update parameters from the request DTO.
    pub fn from_dto(id: i32, dto: UpdateMeditationSessionDto) -> Self {
        Self {
            id,
            title: dto.title,
            session_type: dto.session_type,
            duration_seconds: dto.duration_seconds,
            mood_before: dto.mood_before,
        }
    }
}

/// Paginated collection of meditation sessions with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMeditationSessions {
    /// Sessions for this page, newest first.
    pub sessions: Vec<MeditationSession>,
    /// Total number of matching sessions across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of sessions per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedMeditationSessions {
    /// Converts the paginated sessions domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedMeditationSessionsDto {
        PaginatedMeditationSessionsDto {
            sessions: self.sessions.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
