use sea_orm_migration::{prelude::*, schema::*};

use super::m20250315_000002_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopOrder::Id))
                    .col(integer(ShopOrder::PlayerId))
                    .col(string_null(ShopOrder::StripeSessionId).unique_key())
                    .col(string(ShopOrder::ProductType))
                    .col(big_integer(ShopOrder::AmountCents))
                    .col(string(ShopOrder::Currency).default("usd"))
                    .col(string(ShopOrder::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(ShopOrder::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ShopOrder::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_order_player_id")
                            .from(ShopOrder::Table, ShopOrder::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopOrder {
    Table,
    Id,
    PlayerId,
    StripeSessionId,
    ProductType,
    AmountCents,
    Currency,
    Status,
    CreatedAt,
    UpdatedAt,
}
