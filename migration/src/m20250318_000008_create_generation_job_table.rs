use sea_orm_migration::{prelude::*, schema::*};

use super::m20250318_000007_create_arena_table::Arena;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GenerationJob::Table)
                    .if_not_exists()
                    .col(pk_auto(GenerationJob::Id))
                    .col(string(GenerationJob::JobType))
                    .col(string(GenerationJob::Status).default("queued"))
                    .col(integer(GenerationJob::CurrentStep).default(0))
                    .col(integer(GenerationJob::TotalSteps))
                    .col(integer_null(GenerationJob::ArenaId))
                    .col(integer_null(GenerationJob::CardTemplateId))
                    .col(json(GenerationJob::Params))
                    .col(json_null(GenerationJob::Result))
                    .col(text_null(GenerationJob::Error))
                    .col(
                        timestamp_with_time_zone(GenerationJob::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(GenerationJob::StartedAt))
                    .col(timestamp_with_time_zone_null(GenerationJob::FinishedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_generation_job_arena_id")
                            .from(GenerationJob::Table, GenerationJob::ArenaId)
                            .to(Arena::Table, Arena::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GenerationJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GenerationJob {
    Table,
    Id,
    JobType,
    Status,
    CurrentStep,
    TotalSteps,
    ArenaId,
    CardTemplateId,
    Params,
    Result,
    Error,
    CreatedAt,
    StartedAt,
    FinishedAt,
}
