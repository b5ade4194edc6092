use crate::data::billing::payment_event::PaymentEventRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::builder::TestBuilder;

mod find_by_stripe_id;
mod record;
