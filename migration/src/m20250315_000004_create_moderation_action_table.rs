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
                    .table(ModerationAction::Table)
                    .if_not_exists()
                    .col(pk_auto(ModerationAction::Id))
                    .col(integer(ModerationAction::PlayerId))
                    .col(integer(ModerationAction::AdminId))
                    .col(string(ModerationAction::Action))
                    .col(text(ModerationAction::Reason))
                    .col(timestamp_with_time_zone_null(ModerationAction::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(ModerationAction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moderation_action_player_id")
                            .from(ModerationAction::Table, ModerationAction::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moderation_action_admin_id")
                            .from(ModerationAction::Table, ModerationAction::AdminId)
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
            .drop_table(Table::drop().table(ModerationAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationAction {
    Table,
    Id,
    PlayerId,
    AdminId,
    Action,
    Reason,
    ExpiresAt,
    CreatedAt,
}
