use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeditationSession::Table)
                    .if_not_exists()
                    .col(pk_auto(MeditationSession::Id))
                    .col(integer(MeditationSession::UserId))
                    .col(string(MeditationSession::Title))
                    .col(string(MeditationSession::SessionType))
                    .col(integer(MeditationSession::DurationSeconds))
                    .col(timestamp(MeditationSession::StartedAt))
                    .col(timestamp_null(MeditationSession::EndedAt))
                    .col(boolean(MeditationSession::Completed).default(false))
                    .col(integer_null(MeditationSession::MoodBefore))
                    .col(integer_null(MeditationSession::MoodAfter))
                    .col(
                        timestamp(MeditationSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meditation_session_user_id")
                            .from(MeditationSession::Table, MeditationSession::UserId)
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
            .drop_table(Table::drop().table(MeditationSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MeditationSession {
    Table,
    Id,
    UserId,
    Title,
    SessionType,
    DurationSeconds,
    StartedAt,
    EndedAt,
    Completed,
    MoodBefore,
    MoodAfter,
    CreatedAt,
}
