use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateGroupSessionDto {
    pub title: String,
    pub description: Option<String>,
    /// Must be in the future.
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    /// Must be at least 2, the host counts as a participant.
    pub max_participants: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct GroupSessionDto {
    pub id: i32,
    pub host_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub max_participants: i32,
    /// One of `scheduled`, `in_progress`, `completed`, `cancelled`.
    pub status: String,
    pub participant_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedGroupSessionsDto {
    pub sessions: Vec<GroupSessionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
