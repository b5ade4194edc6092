//! Billing: Stripe webhook intake and order reporting.
//!
//! The webhook path verifies the `Stripe-Signature` header, records the
//! delivery in the payment event ledger, and moves the referenced order's
//! status. Orders themselves are created by the player storefront; this
//! side only observes them.

pub mod signature;

use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    data::billing::{
        order::ShopOrderRepository,
        payment_event::PaymentEventRepository,
    },
    dto::billing::{PaginatedOrdersDto, ProductRevenueDto, RevenueSummaryDto, ShopOrderDto},
    error::{webhook::WebhookError, AppError},
    model::billing::{
        StripeEvent, EVENT_CHARGE_REFUNDED, EVENT_CHECKOUT_COMPLETED, EVENT_PAYMENT_FAILED,
        ORDER_STATUS_FAILED, ORDER_STATUS_PAID, ORDER_STATUS_REFUNDED,
    },
};

/// Outcome of one webhook delivery, reported back to Stripe.
///
/// Everything except a signature or parse failure acknowledges with 200;
/// Stripe retries anything else, and retrying a delivery we have already
/// recorded would not help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Event applied to an order.
    Processed,
    /// Event id already in the ledger; nothing re-applied.
    Duplicate,
    /// Event recorded but not acted on (unknown type or unresolvable order).
    Recorded,
}

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Handles one verified-signature webhook delivery.
    ///
    /// The caller has already checked the signature; this parses the body,
    /// consults the ledger for duplicates, dispatches by event type, and
    /// records the delivery.
    ///
    /// # Arguments
    /// - `body` - Raw request body, already authenticated
    ///
    /// # Returns
    /// - `Ok(WebhookOutcome)` - Delivery acknowledged
    /// - `Err(AppError)` - Malformed payload or database error
    pub async fn handle_webhook(&self, body: &str) -> Result<WebhookOutcome, AppError> {
        let payload: Value = serde_json::from_str(body)
            .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;
        let event = StripeEvent::from_payload(payload)?;

        let ledger = PaymentEventRepository::new(self.db);

        if ledger.find_by_stripe_id(&event.id).await?.is_some() {
            info!("Ignoring duplicate Stripe event {}", event.id);
            return Ok(WebhookOutcome::Duplicate);
        }

        let new_status = match event.event_type.as_str() {
            EVENT_CHECKOUT_COMPLETED => Some(ORDER_STATUS_PAID),
            EVENT_PAYMENT_FAILED => Some(ORDER_STATUS_FAILED),
            EVENT_CHARGE_REFUNDED => Some(ORDER_STATUS_REFUNDED),
            _ => None,
        };

        let Some(new_status) = new_status else {
            info!(
                "Recording unhandled Stripe event {} ({})",
                event.id, event.event_type
            );
            ledger
                .record(&event.id, &event.event_type, event.payload, false, None)
                .await?;
            return Ok(WebhookOutcome::Recorded);
        };

        let order = match &event.session_id {
            Some(session_id) => {
                ShopOrderRepository::new(self.db)
                    .find_by_session_id(session_id)
                    .await?
            }
            None => None,
        };

        let Some(order) = order else {
            warn!(
                "Stripe event {} references no known order (session {:?})",
                event.id, event.session_id
            );
            ledger
                .record(
                    &event.id,
                    &event.event_type,
                    event.payload,
                    false,
                    Some("no matching order".to_string()),
                )
                .await?;
            return Ok(WebhookOutcome::Recorded);
        };

        ShopOrderRepository::new(self.db)
            .set_status(order.id, new_status)
            .await?;

        info!(
            "Stripe event {} moved order {} to {}",
            event.id, order.id, new_status
        );

        ledger
            .record(&event.id, &event.event_type, event.payload, true, None)
            .await?;

        Ok(WebhookOutcome::Processed)
    }

    /// Gets orders with pagination and an optional status filter.
    pub async fn get_orders(
        &self,
        status: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrdersDto, AppError> {
        let (orders, total) = ShopOrderRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(PaginatedOrdersDto {
            orders: orders.into_iter().map(ShopOrderDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets one order by id.
    pub async fn get_order(&self, id: i32) -> Result<ShopOrderDto, AppError> {
        let Some(order) = ShopOrderRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Order {} not found", id)));
        };

        Ok(ShopOrderDto::from(order))
    }

    /// Builds the revenue summary over paid orders, grouped by product.
    pub async fn revenue_summary(&self) -> Result<RevenueSummaryDto, AppError> {
        let by_product = ShopOrderRepository::new(self.db).revenue_by_product().await?;

        let paid_orders = by_product.iter().map(|p| p.orders).sum();
        let total_revenue_cents = by_product.iter().map(|p| p.revenue_cents).sum();

        Ok(RevenueSummaryDto {
            paid_orders,
            total_revenue_cents,
            by_product: by_product
                .into_iter()
                .map(|p| ProductRevenueDto {
                    product_type: p.product_type,
                    orders: p.orders,
                    revenue_cents: p.revenue_cents,
                })
                .collect(),
        })
    }
}
