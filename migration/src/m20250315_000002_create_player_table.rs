use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_uniq(Player::Email))
                    .col(string(Player::DisplayName))
                    .col(integer(Player::EloRating).default(1000))
                    .col(boolean(Player::IsBanned).default(false))
                    .col(string_null(Player::BanReason))
                    .col(integer(Player::WarningCount).default(0))
                    .col(
                        timestamp_with_time_zone(Player::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Player::LastSeenAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Email,
    DisplayName,
    EloRating,
    IsBanned,
    BanReason,
    BanExpiresAt,
    WarningCount,
    CreatedAt,
    LastSeenAt,
}
