//! Shop order factory for creating test order entities.
//!
//! This module provides factory methods for creating shop orders with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shop orders with customizable fields.
///
/// Provides a builder pattern for creating order entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::shop_order::ShopOrderFactory;
///
/// let order = ShopOrderFactory::new(&db, player.id)
///     .stripe_session_id(Some("cs_test_abc".to_string()))
///     .status("paid")
///     .build()
///     .await?;
/// ```
pub struct ShopOrderFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    stripe_session_id: Option<String>,
    product_type: String,
    amount_cents: i64,
    currency: String,
    status: String,
}

impl<'a> ShopOrderFactory<'a> {
    /// Creates a new ShopOrderFactory with default values.
    ///
    /// Defaults:
    /// - stripe_session_id: `Some("cs_test_{id}")` where id is auto-incremented
    /// - product_type: `"card_pack"`
    /// - amount_cents: `999`
    /// - currency: `"usd"`
    /// - status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `player_id` - Player ID the order belongs to
    ///
    /// # Returns
    /// - `ShopOrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, player_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            player_id,
            stripe_session_id: Some(format!("cs_test_{}", id)),
            product_type: "card_pack".to_string(),
            amount_cents: 999,
            currency: "usd".to_string(),
            status: "pending".to_string(),
        }
    }

    /// Sets the Stripe checkout session ID for the order.
    ///
    /// # Arguments
    /// - `stripe_session_id` - Checkout session ID, or `None` if not yet created
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn stripe_session_id(mut self, stripe_session_id: Option<String>) -> Self {
        self.stripe_session_id = stripe_session_id;
        self
    }

    /// Sets the product type for the order.
    ///
    /// # Arguments
    /// - `product_type` - Purchased product kind, e.g. `"card_pack"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    /// Sets the amount for the order.
    ///
    /// # Arguments
    /// - `amount_cents` - Order total in the currency's smallest unit
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    /// Sets the status for the order.
    ///
    /// # Arguments
    /// - `status` - One of `pending`, `paid`, `failed`, `refunded`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the shop order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shop_order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shop_order::Model, DbErr> {
        let now = Utc::now();
        entity::shop_order::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            stripe_session_id: ActiveValue::Set(self.stripe_session_id),
            product_type: ActiveValue::Set(self.product_type),
            amount_cents: ActiveValue::Set(self.amount_cents),
            currency: ActiveValue::Set(self.currency),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop order with default values for the specified player.
///
/// Shorthand for `ShopOrderFactory::new(db, player_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_id` - Player ID the order belongs to
///
/// # Returns
/// - `Ok(entity::shop_order::Model)` - Created order entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let order = create_order(&db, player.id).await?;
/// ```
pub async fn create_order(
    db: &DatabaseConnection,
    player_id: i32,
) -> Result<entity::shop_order::Model, DbErr> {
    ShopOrderFactory::new(db, player_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::player::create_player;

    #[tokio::test]
    async fn creates_order_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_billing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let player = create_player(db).await?;
        let order = create_order(db, player.id).await?;

        assert_eq!(order.player_id, player.id);
        assert_eq!(order.status, "pending");
        assert_eq!(order.amount_cents, 999);
        assert!(order.stripe_session_id.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_orders_with_unique_session_ids() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_billing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let player = create_player(db).await?;
        let first = create_order(db, player.id).await?;
        let second = create_order(db, player.id).await?;

        assert_ne!(first.stripe_session_id, second.stripe_session_id);

        Ok(())
    }
}
