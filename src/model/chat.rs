//! Chat message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::chat::{ChatMessageDto, PaginatedChatMessagesDto};

/// A chat message posted in a group session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub group_session_id: i32,
    pub user_id: i32,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            group_session_id: self.group_session_id,
            user_id: self.user_id,
            content: self.content,
            sent_at: self.sent_at,
        }
    }

    pub fn from_entity(entity: entity::chat_message::Model) -> Self {
        Self {
            id: entity.id,
            group_session_id: entity.group_session_id,
            user_id: entity.user_id,
            content: entity.content,
            sent_at: entity.sent_at,
        }
    }
}

/// Parameters for posting a chat message.
#[derive(Debug, Clone)]
pub struct CreateChatMessageParams {
    pub group_session_id: i32,
    pub user_id: i32,
    pub content: String,
}

/// Paginated collection of chat messages, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedChatMessages {
    pub messages: Vec<ChatMessage>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedChatMessages {
    pub fn into_dto(self) -> PaginatedChatMessagesDto {
        PaginatedChatMessagesDto {
            messages: self.messages.into_iter().map(|m| m.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
