//! Repository test suites.
//!
//! One directory per repository, one file per method under test, all on
//! in-memory SQLite through `test_utils::builder::TestBuilder`.

mod admin;
mod announcement;
mod arena;
mod article;
mod audit;
mod card;
mod generation;
mod nfc;
mod order;
mod payment_event;
mod player;
mod video;
