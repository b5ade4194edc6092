//! Shop order repository.
//!
//! Orders are created by the player-facing storefront; this side only reads
//! them and moves their status in response to verified webhook events.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::model::billing::ORDER_STATUS_PAID;

/// Revenue totals for one product type, folded from paid orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRevenue {
    pub product_type: String,
    pub orders: u64,
    pub revenue_cents: i64,
}

pub struct ShopOrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopOrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::shop_order::Model>, DbErr> {
        entity::prelude::ShopOrder::find_by_id(id).one(self.db).await
    }

    /// Finds the order tied to a Stripe checkout session.
    pub async fn find_by_session_id(
        &self,
        session_id: &str,
    ) -> Result<Option<entity::shop_order::Model>, DbErr> {
        entity::prelude::ShopOrder::find()
            .filter(entity::shop_order::Column::StripeSessionId.eq(session_id))
            .one(self.db)
            .await
    }

    /// Gets orders with pagination and an optional status filter, newest first.
    pub async fn get_paginated(
        &self,
        status: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::shop_order::Model>, u64), DbErr> {
        let mut find = entity::prelude::ShopOrder::find();

        if let Some(status) = status {
            find = find.filter(entity::shop_order::Column::Status.eq(status));
        }

        let paginator = find
            .order_by_desc(entity::shop_order::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    /// Moves an order to a new status and stamps `updated_at`.
    pub async fn set_status(&self, id: i32, status: &str) -> Result<(), DbErr> {
        entity::prelude::ShopOrder::update_many()
            .filter(entity::shop_order::Column::Id.eq(id))
            .col_expr(entity::shop_order::Column::Status, Expr::value(status))
            .col_expr(entity::shop_order::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Folds paid orders into per-product revenue totals.
    ///
    /// Reporting runs at admin-dashboard scale, so the fold happens in
    /// process rather than with a database GROUP BY.
    ///
    /// # Returns
    /// - `Ok(Vec<ProductRevenue>)` - Totals sorted by product type
    /// - `Err(DbErr)` - Database error during query
    pub async fn revenue_by_product(&self) -> Result<Vec<ProductRevenue>, DbErr> {
        let paid = entity::prelude::ShopOrder::find()
            .filter(entity::shop_order::Column::Status.eq(ORDER_STATUS_PAID))
            .all(self.db)
            .await?;

        let mut totals: std::collections::BTreeMap<String, (u64, i64)> =
            std::collections::BTreeMap::new();

        for order in paid {
            let entry = totals.entry(order.product_type).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += order.amount_cents;
        }

        Ok(totals
            .into_iter()
            .map(|(product_type, (orders, revenue_cents))| ProductRevenue {
                product_type,
                orders,
                revenue_cents,
            })
            .collect())
    }

    /// Counts all orders, optionally restricted to one status.
    pub async fn count_all(&self, status: Option<&str>) -> Result<u64, DbErr> {
        let mut find = entity::prelude::ShopOrder::find();

        if let Some(status) = status {
            find = find.filter(entity::shop_order::Column::Status.eq(status));
        }

        find.count(self.db).await
    }
}
