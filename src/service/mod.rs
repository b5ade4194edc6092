//! Business logic services.
//!
//! Services sit between controllers and repositories: they own the rules
//! (conflict checks, audit writes, permission-independent invariants) and
//! return DTO-ready data. Controllers never touch repositories directly.

pub mod admin;
pub mod analytics;
pub mod arena;
pub mod audit;
pub mod auth;
pub mod billing;
pub mod card;
pub mod cms;
pub mod generation;
pub mod player;
