//! Card template factory for creating test card template entities.
//!
//! This module provides factory methods for creating card templates with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test card templates with customizable fields.
///
/// Provides a builder pattern for creating card template entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card_template::CardTemplateFactory;
///
/// let card = CardTemplateFactory::new(&db)
///     .name("Ember Drake")
///     .rarity("legendary")
///     .published(true)
///     .build()
///     .await?;
/// ```
pub struct CardTemplateFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    description: String,
    rarity: String,
    category: String,
    mana_cost: i32,
    attack: i32,
    defense: i32,
    health: i32,
    is_published: bool,
}

impl<'a> CardTemplateFactory<'a> {
    /// Creates a new CardTemplateFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"card-{id}"` where id is auto-incremented
    /// - name: `"Card {id}"`
    /// - rarity: `"common"`
    /// - category: `"creature"`
    /// - mana_cost: `2`, attack: `2`, defense: `2`, health: `3`
    /// - is_published: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CardTemplateFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("card-{}", id),
            name: format!("Card {}", id),
            description: "Test card description".to_string(),
            rarity: "common".to_string(),
            category: "creature".to_string(),
            mana_cost: 2,
            attack: 2,
            defense: 2,
            health: 3,
            is_published: false,
        }
    }

    /// Sets the slug for the card template.
    ///
    /// # Arguments
    /// - `slug` - URL-safe unique identifier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the name for the card template.
    ///
    /// # Arguments
    /// - `name` - Display name for the card
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the rarity for the card template.
    ///
    /// # Arguments
    /// - `rarity` - One of `common`, `rare`, `epic`, `legendary`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Sets the category for the card template.
    ///
    /// # Arguments
    /// - `category` - One of `creature`, `structure`, `action`, `equipment`, `special`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the mana cost for the card template.
    ///
    /// # Arguments
    /// - `mana_cost` - Mana required to play the card
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn mana_cost(mut self, mana_cost: i32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    /// Sets whether the card template is published.
    ///
    /// # Arguments
    /// - `published` - Whether the card appears in the public catalog
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn published(mut self, published: bool) -> Self {
        self.is_published = published;
        self
    }

    /// Builds and inserts the card template entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card_template::Model)` - Created card template entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card_template::Model, DbErr> {
        let now = Utc::now();
        entity::card_template::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            flavor_text: ActiveValue::Set(None),
            rarity: ActiveValue::Set(self.rarity),
            category: ActiveValue::Set(self.category),
            mana_cost: ActiveValue::Set(self.mana_cost),
            attack: ActiveValue::Set(self.attack),
            defense: ActiveValue::Set(self.defense),
            health: ActiveValue::Set(self.health),
            artwork_url: ActiveValue::Set(None),
            video_url: ActiveValue::Set(None),
            has_animation: ActiveValue::Set(false),
            is_published: ActiveValue::Set(self.is_published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card template with default values.
///
/// Shorthand for `CardTemplateFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::card_template::Model)` - Created card template entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let card = create_template(&db).await?;
/// ```
pub async fn create_template(
    db: &DatabaseConnection,
) -> Result<entity::card_template::Model, DbErr> {
    CardTemplateFactory::new(db).build().await
}

/// Creates a card template that is already published.
///
/// Shorthand for `CardTemplateFactory::new(db).published(true).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::card_template::Model)` - Created card template entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let card = create_published_template(&db).await?;
/// ```
pub async fn create_published_template(
    db: &DatabaseConnection,
) -> Result<entity::card_template::Model, DbErr> {
    CardTemplateFactory::new(db).published(true).build().await
}
