use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{webhook::WebhookError, AppError},
    service::billing::{signature::verify_signature, BillingService},
    state::AppState,
};

/// Tag for grouping billing endpoints in OpenAPI documentation
pub static BILLING_TAG: &str = "billing";

/// POST /v1/billing/webhooks/stripe - Stripe webhook intake.
///
/// The raw body is taken as a `String` because the signature covers the
/// exact bytes Stripe sent; parsing before verification would break it.
/// Bad signatures answer 400; everything past verification answers 200 so
/// Stripe does not retry deliveries we have already recorded.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookError::MissingSignature)?;

    verify_signature(&state.config.stripe_webhook_secret, signature, &body)?;

    let outcome = BillingService::new(&state.db).handle_webhook(&body).await?;

    Ok((StatusCode::OK, Json(json!({ "received": true, "outcome": format!("{:?}", outcome).to_lowercase() }))))
}

#[derive(Deserialize)]
pub struct OrderListParams {
    /// Filter by order status (pending, paid, failed, refunded).
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

/// GET /v1/admin/billing/orders - List shop orders.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<impl IntoResponse, AppError> {
    let orders = BillingService::new(&state.db)
        .get_orders(params.status.as_deref(), params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// GET /v1/admin/billing/summary - Paid revenue grouped by product type.
pub async fn revenue_summary(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = BillingService::new(&state.db).revenue_summary().await?;

    Ok((StatusCode::OK, Json(summary)))
}
