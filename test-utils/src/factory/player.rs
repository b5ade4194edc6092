//! Player factory for creating test player entities.
//!
//! This module provides factory methods for creating player entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Provides a builder pattern for creating player entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .display_name("CardShark")
///     .elo_rating(1450)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    display_name: String,
    elo_rating: i32,
    is_banned: bool,
    ban_reason: Option<String>,
    ban_expires_at: Option<chrono::DateTime<Utc>>,
    warning_count: i32,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - email: `"player{id}@example.com"` where id is auto-incremented
    /// - display_name: `"Player {id}"`
    /// - elo_rating: `1000`
    /// - is_banned: `false`
    /// - warning_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("player{}@example.com", id),
            display_name: format!("Player {}", id),
            elo_rating: 1000,
            is_banned: false,
            ban_reason: None,
            ban_expires_at: None,
            warning_count: 0,
        }
    }

    /// Sets the email for the player.
    ///
    /// # Arguments
    /// - `email` - Account email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name for the player.
    ///
    /// # Arguments
    /// - `display_name` - Public display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the ELO rating for the player.
    ///
    /// # Arguments
    /// - `elo_rating` - Competitive rating value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn elo_rating(mut self, elo_rating: i32) -> Self {
        self.elo_rating = elo_rating;
        self
    }

    /// Marks the player as banned with the given reason.
    ///
    /// # Arguments
    /// - `reason` - Ban reason text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn banned(mut self, reason: impl Into<String>) -> Self {
        self.is_banned = true;
        self.ban_reason = Some(reason.into());
        self
    }

    /// Sets the ban expiry for the player.
    ///
    /// # Arguments
    /// - `ban_expires_at` - When the ban lapses, or `None` for permanent
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn ban_expires_at(mut self, ban_expires_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.ban_expires_at = ban_expires_at;
        self
    }

    /// Sets the warning count for the player.
    ///
    /// # Arguments
    /// - `warning_count` - Number of warnings already on record
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn warning_count(mut self, warning_count: i32) -> Self {
        self.warning_count = warning_count;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            display_name: ActiveValue::Set(self.display_name),
            elo_rating: ActiveValue::Set(self.elo_rating),
            is_banned: ActiveValue::Set(self.is_banned),
            ban_reason: ActiveValue::Set(self.ban_reason),
            ban_expires_at: ActiveValue::Set(self.ban_expires_at),
            warning_count: ActiveValue::Set(self.warning_count),
            created_at: ActiveValue::Set(Utc::now()),
            last_seen_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let player = create_player(&db).await?;
/// ```
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player that is already banned.
///
/// Shorthand for `PlayerFactory::new(db).banned(reason).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `reason` - Ban reason text
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let banned = create_banned_player(&db, "griefing").await?;
/// ```
pub async fn create_banned_player(
    db: &DatabaseConnection,
    reason: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).banned(reason).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_player_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Player).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let player = create_player(db).await?;

        assert!(!player.email.is_empty());
        assert_eq!(player.elo_rating, 1000);
        assert!(!player.is_banned);
        assert_eq!(player.warning_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_banned_player() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Player).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let player = create_banned_player(db, "griefing").await?;

        assert!(player.is_banned);
        assert_eq!(player.ban_reason.as_deref(), Some("griefing"));
        assert!(player.ban_expires_at.is_none());

        Ok(())
    }
}
