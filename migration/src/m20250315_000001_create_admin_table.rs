use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(pk_auto(Admin::Id))
                    .col(string_uniq(Admin::Email))
                    .col(string(Admin::Username))
                    .col(string(Admin::PasswordHash))
                    .col(string(Admin::Role))
                    .col(boolean(Admin::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Admin::LastLoginAt))
                    .col(
                        timestamp_with_time_zone(Admin::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Admin {
    Table,
    Id,
    Email,
    Username,
    PasswordHash,
    Role,
    IsActive,
    LastLoginAt,
    CreatedAt,
}
