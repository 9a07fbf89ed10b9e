use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000006_create_group_session_table::GroupSession,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer(ChatMessage::GroupSessionId))
                    .col(integer(ChatMessage::UserId))
                    .col(text(ChatMessage::Content))
                    .col(
                        timestamp(ChatMessage::SentAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_message_group_session_id")
                            .from(ChatMessage::Table, ChatMessage::GroupSessionId)
                            .to(GroupSession::Table, GroupSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_message_user_id")
                            .from(ChatMessage::Table, ChatMessage::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatMessage {
    Table,
    Id,
    GroupSessionId,
    UserId,
    Content,
    SentAt,
}
