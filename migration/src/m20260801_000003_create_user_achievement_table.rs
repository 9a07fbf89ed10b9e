use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000002_create_achievement_table::Achievement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAchievement::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAchievement::Id))
                    .col(integer(UserAchievement::UserId))
                    .col(integer(UserAchievement::AchievementId))
                    .col(integer(UserAchievement::Progress).default(0))
                    .col(boolean(UserAchievement::IsCompleted).default(false))
                    .col(timestamp_null(UserAchievement::DateEarned))
                    .col(
                        timestamp(UserAchievement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(UserAchievement::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_achievement_user_id")
                            .from(UserAchievement::Table, UserAchievement::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_achievement_achievement_id")
                            .from(UserAchievement::Table, UserAchievement::AchievementId)
                            .to(Achievement::Table, Achievement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_achievement_unique_pair")
                    .table(UserAchievement::Table)
                    .col(UserAchievement::UserId)
                    .col(UserAchievement::AchievementId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAchievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAchievement {
    Table,
    Id,
    UserId,
    AchievementId,
    Progress,
    IsCompleted,
    DateEarned,
    CreatedAt,
    UpdatedAt,
}
