use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateChatMessageDto {
    /// Non-empty, at most 2000 characters.
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    pub group_session_id: i32,
    pub user_id: i32,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedChatMessagesDto {
    pub messages: Vec<ChatMessageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
