//! HTTP request handlers.
//!
//! Controllers unwrap the request (path, query, JSON body, and the
//! `CurrentAdmin` extension placed by the enforcement middleware), call one
//! service method, and wrap the result in a status code. No business rules
//! live here.

pub mod admins;
pub mod analytics;
pub mod arenas;
pub mod audit;
pub mod auth;
pub mod billing;
pub mod cards;
pub mod catalog;
pub mod cms;
pub mod cms_admin;
pub mod health;
pub mod players;

use serde::Deserialize;

/// Shared pagination query parameters. Pages are zero-indexed.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}
