//! Data transfer objects for the HTTP API.
//!
//! Request and response shapes for every endpoint, kept separate from the
//! database entities and domain parameter types. Timestamps serialize as Unix
//! seconds. All response DTOs derive `ToSchema` so the OpenAPI document stays
//! in sync with the wire format.

pub mod admin;
pub mod analytics;
pub mod api;
pub mod arena;
pub mod audit;
pub mod auth;
pub mod billing;
pub mod card;
pub mod cms;
pub mod generation;
pub mod player;
