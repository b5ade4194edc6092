//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a card template together with one provisioned NFC instance.
///
/// This is a convenience method that creates:
/// 1. Card template (unpublished, with default stats)
/// 2. NFC card instance minted from that template
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((template, instance))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_instance_with_template(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::card_template::Model,
        entity::nfc_card_instance::Model,
    ),
    DbErr,
> {
    let template = crate::factory::card_template::create_template(db).await?;
    let instance = crate::factory::nfc_card_instance::create_instance(db, template.id).await?;

    Ok((template, instance))
}

/// Creates a news article together with its authoring admin.
///
/// This is a convenience method that creates:
/// 1. Admin (as article author)
/// 2. News article authored by that admin
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((admin, article))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::admin::Model, entity::news_article::Model), DbErr> {
    let admin = crate::factory::admin::create_admin(db).await?;
    let article = crate::factory::news_article::create_article(db, admin.id).await?;

    Ok((admin, article))
}
