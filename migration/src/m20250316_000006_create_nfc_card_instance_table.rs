use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250315_000002_create_player_table::Player,
    m20250316_000005_create_card_template_table::CardTemplate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NfcCardInstance::Table)
                    .if_not_exists()
                    .col(pk_auto(NfcCardInstance::Id))
                    .col(integer(NfcCardInstance::TemplateId))
                    .col(string_uniq(NfcCardInstance::NfcUid))
                    .col(integer(NfcCardInstance::SerialNumber))
                    .col(string(NfcCardInstance::Status).default("provisioned"))
                    .col(integer_null(NfcCardInstance::OwnerPlayerId))
                    .col(timestamp_with_time_zone_null(NfcCardInstance::ActivatedAt))
                    .col(
                        timestamp_with_time_zone(NfcCardInstance::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nfc_card_instance_template_id")
                            .from(NfcCardInstance::Table, NfcCardInstance::TemplateId)
                            .to(CardTemplate::Table, CardTemplate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nfc_card_instance_owner_player_id")
                            .from(NfcCardInstance::Table, NfcCardInstance::OwnerPlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NfcCardInstance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NfcCardInstance {
    Table,
    Id,
    TemplateId,
    NfcUid,
    SerialNumber,
    Status,
    OwnerPlayerId,
    ActivatedAt,
    CreatedAt,
}
