use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(CardTemplate::Id))
                    .col(string_uniq(CardTemplate::Slug))
                    .col(string(CardTemplate::Name))
                    .col(text(CardTemplate::Description))
                    .col(text_null(CardTemplate::FlavorText))
                    .col(string(CardTemplate::Rarity))
                    .col(string(CardTemplate::Category))
                    .col(integer(CardTemplate::ManaCost))
                    .col(integer(CardTemplate::Attack))
                    .col(integer(CardTemplate::Defense))
                    .col(integer(CardTemplate::Health))
                    .col(string_null(CardTemplate::ArtworkUrl))
                    .col(boolean(CardTemplate::IsPublished).default(false))
                    .col(
                        timestamp_with_time_zone(CardTemplate::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CardTemplate::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardTemplate {
    Table,
    Id,
    Slug,
    Name,
    Description,
    FlavorText,
    Rarity,
    Category,
    ManaCost,
    Attack,
    Defense,
    Health,
    ArtworkUrl,
    VideoUrl,
    HasAnimation,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
