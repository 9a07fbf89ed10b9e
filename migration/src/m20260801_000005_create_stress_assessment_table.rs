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
                    .table(StressAssessment::Table)
                    .if_not_exists()
                    .col(pk_auto(StressAssessment::Id))
                    .col(integer(StressAssessment::UserId))
                    .col(integer(StressAssessment::Score))
                    .col(integer(StressAssessment::PhysicalScore))
                    .col(integer(StressAssessment::EmotionalScore))
                    .col(integer(StressAssessment::BehavioralScore))
                    .col(integer(StressAssessment::CognitiveScore))
                    .col(json(StressAssessment::Triggers))
                    .col(json(StressAssessment::Symptoms))
                    .col(timestamp(StressAssessment::RecordedAt))
                    .col(
                        timestamp(StressAssessment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stress_assessment_user_id")
                            .from(StressAssessment::Table, StressAssessment::UserId)
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
            .drop_table(Table::drop().table(StressAssessment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StressAssessment {
    Table,
    Id,
    UserId,
    Score,
    PhysicalScore,
    EmotionalScore,
    BehavioralScore,
    CognitiveScore,
    Triggers,
    Symptoms,
    RecordedAt,
    CreatedAt,
}
