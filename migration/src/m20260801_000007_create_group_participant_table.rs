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
                    .table(GroupParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupParticipant::Id))
                    .col(integer(GroupParticipant::GroupSessionId))
                    .col(integer(GroupParticipant::UserId))
                    .col(
                        timestamp(GroupParticipant::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_participant_group_session_id")
                            .from(GroupParticipant::Table, GroupParticipant::GroupSessionId)
                            .to(GroupSession::Table, GroupSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_participant_user_id")
                            .from(GroupParticipant::Table, GroupParticipant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_participant_unique_pair")
                    .table(GroupParticipant::Table)
                    .col(GroupParticipant::GroupSessionId)
                    .col(GroupParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupParticipant {
    Table,
    Id,
    GroupSessionId,
    UserId,
    JoinedAt,
}
