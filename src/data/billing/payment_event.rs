//! Payment event ledger.
//!
//! Every verified webhook delivery is recorded here keyed by the Stripe
//! event id. The unique key is what makes duplicate deliveries harmless:
//! an event already in the ledger is acknowledged without reprocessing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::Value;

pub struct PaymentEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_stripe_id(
        &self,
        stripe_event_id: &str,
    ) -> Result<Option<entity::payment_event::Model>, DbErr> {
        entity::prelude::PaymentEvent::find()
            .filter(entity::payment_event::Column::StripeEventId.eq(stripe_event_id))
            .one(self.db)
            .await
    }

    /// Records one webhook delivery.
    ///
    /// # Arguments
    /// - `stripe_event_id` - Stripe event id, the idempotency key
    /// - `event_type` - Stripe event type string
    /// - `payload` - Full verified payload, stored verbatim
    /// - `processed` - Whether the dispatcher acted on the event
    /// - `error` - Note recorded when dispatch could not complete
    ///
    /// # Returns
    /// - `Ok(Model)` - The ledger row
    /// - `Err(DbErr)` - Database error, including duplicate event ids
    pub async fn record(
        &self,
        stripe_event_id: &str,
        event_type: &str,
        payload: Value,
        processed: bool,
        error: Option<String>,
    ) -> Result<entity::payment_event::Model, DbErr> {
        entity::payment_event::ActiveModel {
            id: ActiveValue::NotSet,
            stripe_event_id: ActiveValue::Set(stripe_event_id.to_string()),
            event_type: ActiveValue::Set(event_type.to_string()),
            payload: ActiveValue::Set(payload),
            processed: ActiveValue::Set(processed),
            error: ActiveValue::Set(error),
            received_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
