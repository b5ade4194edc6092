use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VideoItem::Table)
                    .if_not_exists()
                    .col(pk_auto(VideoItem::Id))
                    .col(string(VideoItem::Title))
                    .col(text(VideoItem::Description))
                    .col(string(VideoItem::VideoUrl))
                    .col(string_null(VideoItem::ThumbnailUrl))
                    .col(integer(VideoItem::DurationSeconds).default(0))
                    .col(boolean(VideoItem::IsPublished).default(false))
                    .col(big_integer(VideoItem::ViewCount).default(0))
                    .col(
                        timestamp_with_time_zone(VideoItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(VideoItem::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VideoItem {
    Table,
    Id,
    Title,
    Description,
    VideoUrl,
    ThumbnailUrl,
    DurationSeconds,
    IsPublished,
    ViewCount,
    CreatedAt,
    UpdatedAt,
}
