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
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(integer_null(AuditLog::AdminId))
                    .col(string(AuditLog::Action))
                    .col(string(AuditLog::Resource))
                    .col(integer_null(AuditLog::ResourceId))
                    .col(json_null(AuditLog::Detail))
                    .col(
                        timestamp_with_time_zone(AuditLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_log_admin_id")
                            .from(AuditLog::Table, AuditLog::AdminId)
                            .to(Admin::Table, Admin::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuditLog {
    Table,
    Id,
    AdminId,
    Action,
    Resource,
    ResourceId,
    Detail,
    CreatedAt,
}
