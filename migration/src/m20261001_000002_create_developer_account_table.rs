use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeveloperAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(DeveloperAccount::Id))
                    .col(string_uniq(DeveloperAccount::DiscordId))
                    .col(string(DeveloperAccount::Name))
                    .col(string(DeveloperAccount::Role))
                    .col(string_null(DeveloperAccount::AddedBy))
                    .col(
                        timestamp_with_time_zone(DeveloperAccount::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeveloperAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeveloperAccount {
    Table,
    Id,
    DiscordId,
    Name,
    Role,
    AddedBy,
    CreatedAt,
}
