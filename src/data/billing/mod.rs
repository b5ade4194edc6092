//! Billing repositories: shop orders and the webhook event ledger.

pub mod order;
pub mod payment_event;
