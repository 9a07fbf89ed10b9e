use sea_orm::DatabaseConnection;

use crate::{
    data::{
        chat_message::ChatMessageRepository, group_participant::GroupParticipantRepository,
        group_session::GroupSessionRepository,
    },
    error::AppError,
    model::chat::{ChatMessage, CreateChatMessageParams, PaginatedChatMessages},
};

/// Maximum accepted message length in characters.
const MAX_MESSAGE_LENGTH: usize = 2000;

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a message to a group session's chat.
    ///
    /// # Returns
    /// - `Ok(ChatMessage)` - The posted message
    /// - `Err(AppError::BadRequest)` - Empty or over-length content
    /// - `Err(AppError::Forbidden)` - Sender is not a participant
    pub async fn post(&self, params: CreateChatMessageParams) -> Result<ChatMessage, AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message content must not be empty".to_string(),
            ));
        }

        if params.content.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Message content must be at most {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        self.require_participant(params.group_session_id, params.user_id)
            .await?;

        let message = ChatMessageRepository::new(self.db).create(params).await?;

        Ok(message)
    }

    /// Gets paginated messages for a session, oldest first.
    ///
    /// # Access Control
    /// Participants only.
    pub async fn get_paginated(
        &self,
        group_session_id: i32,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedChatMessages, AppError> {
        self.require_participant(group_session_id, user_id).await?;

        let (messages, total) = ChatMessageRepository::new(self.db)
            .get_by_session_paginated(group_session_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedChatMessages {
            messages,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    async fn require_participant(
        &self,
        group_session_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        GroupSessionRepository::new(self.db)
            .find_by_id(group_session_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Group session with id {} not found",
                    group_session_id
                ))
            })?;

        let is_participant = GroupParticipantRepository::new(self.db)
            .is_participant(group_session_id, user_id)
            .await?;

        if !is_participant {
            return Err(AppError::Forbidden(
                "Only participants can access this session's chat".to_string(),
            ));
        }

        Ok(())
    }
}
