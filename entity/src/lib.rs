//! SeaORM entity definitions for the Deckport admin backend.
//!
//! One module per database table. The `prelude` module re-exports every
//! `Entity` under its table name for use with `EntityTrait` queries.

pub mod prelude;

pub mod admin;
pub mod announcement;
pub mod arena;
pub mod audit_log;
pub mod card_template;
pub mod generation_job;
pub mod moderation_action;
pub mod news_article;
pub mod nfc_card_instance;
pub mod payment_event;
pub mod player;
pub mod player_warning;
pub mod shop_order;
pub mod video_item;
