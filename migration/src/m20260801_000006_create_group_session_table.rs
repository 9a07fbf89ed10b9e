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
                    .table(GroupSession::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupSession::Id))
                    .col(integer(GroupSession::HostId))
                    .col(string(GroupSession::Title))
                    .col(text_null(GroupSession::Description))
                    .col(timestamp(GroupSession::ScheduledAt))
                    .col(integer(GroupSession::DurationMinutes))
                    .col(integer(GroupSession::MaxParticipants))
                    .col(string(GroupSession::Status))
                    .col(
                        timestamp(GroupSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_session_host_id")
                            .from(GroupSession::Table, GroupSession::HostId)
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
            .drop_table(Table::drop().table(GroupSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupSession {
    Table,
    Id,
    HostId,
    Title,
    Description,
    ScheduledAt,
    DurationMinutes,
    MaxParticipants,
    Status,
    CreatedAt,
}
