use sea_orm_migration::{prelude::*, schema::*};

use super::m20250315_000001_create_admin_table::Admin;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(string(Announcement::Title))
                    .col(text(Announcement::Body))
                    .col(string(Announcement::Audience).default("all"))
                    .col(boolean(Announcement::IsPublished).default(false))
                    .col(timestamp_with_time_zone_null(Announcement::PublishAt))
                    .col(timestamp_with_time_zone_null(Announcement::ExpiresAt))
                    .col(integer(Announcement::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Announcement::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Announcement::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_created_by")
                            .from(Announcement::Table, Announcement::CreatedBy)
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
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    Table,
    Id,
    Title,
    Body,
    Audience,
    IsPublished,
    PublishAt,
    ExpiresAt,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
