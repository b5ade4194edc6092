use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Arena::Table)
                    .if_not_exists()
                    .col(pk_auto(Arena::Id))
                    .col(string(Arena::Name))
                    .col(string(Arena::Theme))
                    .col(text(Arena::Description))
                    .col(string_null(Arena::BackgroundUrl))
                    .col(string_null(Arena::VideoUrl))
                    .col(string_null(Arena::VoiceIntroUrl))
                    .col(string_null(Arena::MusicUrl))
                    .col(json_null(Arena::SpecialRules))
                    .col(integer(Arena::Difficulty).default(1))
                    .col(boolean(Arena::IsActive).default(false))
                    .col(
                        timestamp_with_time_zone(Arena::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Arena::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Arena {
    Table,
    Id,
    Name,
    Theme,
    Description,
    BackgroundUrl,
    VideoUrl,
    VoiceIntroUrl,
    MusicUrl,
    SpecialRules,
    Difficulty,
    IsActive,
    CreatedAt,
}
