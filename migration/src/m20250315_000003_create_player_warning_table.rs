use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250315_000001_create_admin_table::Admin, m20250315_000002_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerWarning::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerWarning::Id))
                    .col(integer(PlayerWarning::PlayerId))
                    .col(integer(PlayerWarning::AdminId))
                    .col(text(PlayerWarning::Reason))
                    .col(
                        timestamp_with_time_zone(PlayerWarning::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_warning_player_id")
                            .from(PlayerWarning::Table, PlayerWarning::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_warning_admin_id")
                            .from(PlayerWarning::Table, PlayerWarning::AdminId)
                            .to(Admin::Table, Admin::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerWarning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerWarning {
    Table,
    Id,
    PlayerId,
    AdminId,
    Reason,
    CreatedAt,
}
