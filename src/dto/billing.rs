use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShopOrderDto {
    pub id: i32,
    pub player_id: i32,
    pub stripe_session_id: Option<String>,
    pub product_type: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<entity::shop_order::Model> for ShopOrderDto {
    fn from(entity: entity::shop_order::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            stripe_session_id: entity.stripe_session_id,
            product_type: entity.product_type,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<ShopOrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Paid revenue for one product type.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProductRevenueDto {
    pub product_type: String,
    pub orders: u64,
    pub revenue_cents: i64,
}

/// Revenue summary across all paid orders, grouped by product type.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RevenueSummaryDto {
    pub paid_orders: u64,
    pub total_revenue_cents: i64,
    pub by_product: Vec<ProductRevenueDto>,
}
