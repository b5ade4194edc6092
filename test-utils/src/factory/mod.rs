//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let admin = factory::admin::create_admin(&db).await?;
//!     let player = factory::player::create_player(&db).await?;
//!
//!     // Create with all dependencies
//!     let (template, instance) =
//!         factory::helpers::create_instance_with_template(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let admin = factory::admin::AdminFactory::new(&db)
//!     .email("ops@deckport.io")
//!     .role("super_admin")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let moderator = factory::create_admin_with_role(&db, "moderator").await?;
//! let banned = factory::create_banned_player(&db, "griefing").await?;
//! ```
//!
//! # Available Factories
//!
//! - `admin` - Create admin account entities
//! - `player` - Create player entities
//! - `card_template` - Create card template entities
//! - `nfc_card_instance` - Create NFC card instance entities
//! - `arena` - Create arena entities
//! - `generation_job` - Create generation job entities
//! - `announcement` - Create announcement entities
//! - `news_article` - Create news article entities
//! - `video_item` - Create video item entities
//! - `shop_order` - Create shop order entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod admin;
pub mod announcement;
pub mod arena;
pub mod card_template;
pub mod generation_job;
pub mod helpers;
pub mod news_article;
pub mod nfc_card_instance;
pub mod player;
pub mod shop_order;
pub mod video_item;

// Re-export commonly used factory functions for concise usage
pub use admin::{create_admin, create_admin_with_role};
pub use announcement::create_announcement;
pub use arena::create_arena;
pub use card_template::{create_published_template, create_template};
pub use generation_job::create_job;
pub use news_article::{create_article, create_published_article};
pub use nfc_card_instance::create_instance;
pub use player::{create_banned_player, create_player};
pub use shop_order::create_order;
pub use video_item::create_video;
