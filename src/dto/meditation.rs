use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateMeditationSessionDto {
    pub title: String,
    /// One of `guided`, `unguided`, `breathing`, `body_scan`.
    pub session_type: String,
    pub duration_seconds: i32,
    /// Defaults to now when omitted.
    pub started_at: Option<DateTime<Utc>>,
    /// Mood rating from 1 to 10 taken before the session.
    pub mood_before: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateMeditationSessionDto {
    pub title: Option<String>,
    pub session_type: Option<String>,
    pub duration_seconds: Option<i32>,
    pub mood_before: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CompleteMeditationSessionDto {
    /// Mood rating from 1 to 10 taken after the session.
    pub mood_after: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MeditationSessionDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub session_type: String,
    pub duration_seconds: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub completed: bool,
    pub mood_before: Option<i32>,
    pub mood_after: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedMeditationSessionsDto {
    pub sessions: Vec<MeditationSessionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
