//! Repositories for database access.
//!
//! One repository per resource area. Repositories own the SeaORM queries and
//! hand entity models back to the service layer; parameter structs from
//! `crate::model` carry validated input in. Nothing above this layer builds
//! queries directly.

pub mod admin;
pub mod analytics;
pub mod arena;
pub mod audit;
pub mod billing;
pub mod card;
pub mod cms;
pub mod generation;
pub mod nfc;
pub mod player;

#[cfg(test)]
mod test;
