use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentEvent::Id))
                    .col(string_uniq(PaymentEvent::StripeEventId))
                    .col(string(PaymentEvent::EventType))
                    .col(json(PaymentEvent::Payload))
                    .col(boolean(PaymentEvent::Processed).default(false))
                    .col(text_null(PaymentEvent::Error))
                    .col(
                        timestamp_with_time_zone(PaymentEvent::ReceivedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentEvent {
    Table,
    Id,
    StripeEventId,
    EventType,
    Payload,
    Processed,
    Error,
    ReceivedAt,
}
