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
                    .table(NewsArticle::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsArticle::Id))
                    .col(string_uniq(NewsArticle::Slug))
                    .col(string(NewsArticle::Title))
                    .col(text(NewsArticle::Summary))
                    .col(text(NewsArticle::Body))
                    .col(string_null(NewsArticle::HeroImageUrl))
                    .col(boolean(NewsArticle::IsPublished).default(false))
                    .col(timestamp_with_time_zone_null(NewsArticle::PublishedAt))
                    .col(big_integer(NewsArticle::ViewCount).default(0))
                    .col(integer(NewsArticle::AuthorId))
                    .col(
                        timestamp_with_time_zone(NewsArticle::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(NewsArticle::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_article_author_id")
                            .from(NewsArticle::Table, NewsArticle::AuthorId)
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
            .drop_table(Table::drop().table(NewsArticle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsArticle {
    Table,
    Id,
    Slug,
    Title,
    Summary,
    Body,
    HeroImageUrl,
    IsPublished,
    PublishedAt,
    ViewCount,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
