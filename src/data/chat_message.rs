use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::chat::{ChatMessage, CreateChatMessageParams};

pub struct ChatMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new chat message stamped with the current time
    pub async fn create(&self, params: CreateChatMessageParams) -> Result<ChatMessage, DbErr> {
        let message = entity::chat_message::ActiveModel {
            group_session_id: ActiveValue::Set(params.group_session_id),
            user_id: ActiveValue::Set(params.user_id),
            content: ActiveValue::Set(params.content),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatMessage::from_entity(message))
    }

    /// Gets paginated messages for a group session, oldest first
    pub async fn get_by_session_paginated(
        &self,
        group_session_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ChatMessage>, u64), DbErr> {
        let paginator = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::GroupSessionId.eq(group_session_id))
            .order_by_asc(entity::chat_message::Column::SentAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let messages = paginator.fetch_page(page).await?;

        Ok((
            messages.into_iter().map(ChatMessage::from_entity).collect(),
            total,
        ))
    }
}
