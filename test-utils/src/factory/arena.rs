//! Arena factory for creating test arena entities.
//!
//! This module provides factory methods for creating arena entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test arenas with customizable fields.
///
/// Provides a builder pattern for creating arena entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::arena::ArenaFactory;
///
/// let arena = ArenaFactory::new(&db)
///     .name("Obsidian Spire")
///     .theme("volcanic")
///     .active(true)
///     .build()
///     .await?;
/// ```
pub struct ArenaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    theme: String,
    description: String,
    special_rules: Option<serde_json::Value>,
    difficulty: i32,
    is_active: bool,
}

impl<'a> ArenaFactory<'a> {
    /// Creates a new ArenaFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Arena {id}"` where id is auto-incremented
    /// - theme: `"ancient ruins"`
    /// - difficulty: `1`
    /// - is_active: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ArenaFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Arena {}", id),
            theme: "ancient ruins".to_string(),
            description: "Test arena description".to_string(),
            special_rules: None,
            difficulty: 1,
            is_active: false,
        }
    }

    /// Sets the name for the arena.
    ///
    /// # Arguments
    /// - `name` - Display name for the arena
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the theme for the arena.
    ///
    /// # Arguments
    /// - `theme` - Visual and narrative theme prompt
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Sets the special rules for the arena.
    ///
    /// # Arguments
    /// - `special_rules` - Optional JSON rules document
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn special_rules(mut self, special_rules: Option<serde_json::Value>) -> Self {
        self.special_rules = special_rules;
        self
    }

    /// Sets the difficulty for the arena.
    ///
    /// # Arguments
    /// - `difficulty` - Difficulty tier, 1 and up
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets whether the arena is active in matchmaking.
    ///
    /// # Arguments
    /// - `active` - Whether players can queue into the arena
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Builds and inserts the arena entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::arena::Model)` - Created arena entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::arena::Model, DbErr> {
        entity::arena::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            theme: ActiveValue::Set(self.theme),
            description: ActiveValue::Set(self.description),
            background_url: ActiveValue::Set(None),
            video_url: ActiveValue::Set(None),
            voice_intro_url: ActiveValue::Set(None),
            music_url: ActiveValue::Set(None),
            special_rules: ActiveValue::Set(self.special_rules),
            difficulty: ActiveValue::Set(self.difficulty),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an arena with default values.
///
/// Shorthand for `ArenaFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::arena::Model)` - Created arena entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let arena = create_arena(&db).await?;
/// ```
pub async fn create_arena(db: &DatabaseConnection) -> Result<entity::arena::Model, DbErr> {
    ArenaFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_arena_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Arena).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let arena = create_arena(db).await?;

        assert!(!arena.name.is_empty());
        assert_eq!(arena.difficulty, 1);
        assert!(!arena.is_active);
        assert!(arena.special_rules.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_arena_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Arena).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let arena = ArenaFactory::new(db)
            .name("Obsidian Spire")
            .theme("volcanic")
            .difficulty(3)
            .active(true)
            .build()
            .await?;

        assert_eq!(arena.name, "Obsidian Spire");
        assert_eq!(arena.theme, "volcanic");
        assert_eq!(arena.difficulty, 3);
        assert!(arena.is_active);

        Ok(())
    }
}
