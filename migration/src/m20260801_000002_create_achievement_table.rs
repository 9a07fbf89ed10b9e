use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(pk_auto(Achievement::Id))
                    .col(string(Achievement::Name))
                    .col(text(Achievement::Description))
                    .col(string(Achievement::Category))
                    .col(string(Achievement::CriteriaType))
                    .col(integer(Achievement::CriteriaValue))
                    .col(string(Achievement::Icon))
                    .col(integer(Achievement::Points))
                    .col(
                        timestamp(Achievement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Achievement {
    Table,
    Id,
    Name,
    Description,
    Category,
    CriteriaType,
    CriteriaValue,
    Icon,
    Points,
    CreatedAt,
}
