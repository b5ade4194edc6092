use sea_orm::entity::prelude::*;

/// Ledger of received Stripe webhook deliveries, keyed by Stripe's event id
/// so duplicate deliveries are detected and skipped.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub stripe_event_id: String,
    pub event_type: String,
    pub payload: Json,
    pub processed: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
    pub received_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
