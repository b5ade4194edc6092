//! Announcement factory for creating test announcement entities.
//!
//! This module provides factory methods for creating announcements with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements with customizable fields.
///
/// Provides a builder pattern for creating announcement entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::announcement::AnnouncementFactory;
///
/// let announcement = AnnouncementFactory::new(&db, admin.id)
///     .title("Season reset")
///     .published(true)
///     .build()
///     .await?;
/// ```
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    body: String,
    audience: String,
    is_published: bool,
    publish_at: Option<chrono::DateTime<Utc>>,
    expires_at: Option<chrono::DateTime<Utc>>,
    created_by: i32,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Announcement {id}"` where id is auto-incremented
    /// - audience: `"all"`
    /// - is_published: `false`
    /// - publish_at / expires_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - Admin ID that authored the announcement
    ///
    /// # Returns
    /// - `AnnouncementFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Announcement {}", id),
            body: "Test announcement body".to_string(),
            audience: "all".to_string(),
            is_published: false,
            publish_at: None,
            expires_at: None,
            created_by,
        }
    }

    /// Sets the title for the announcement.
    ///
    /// # Arguments
    /// - `title` - Headline text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the audience for the announcement.
    ///
    /// # Arguments
    /// - `audience` - One of `all`, `players`, `admins`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Sets whether the announcement is published.
    ///
    /// # Arguments
    /// - `published` - Whether the announcement is visible
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn published(mut self, published: bool) -> Self {
        self.is_published = published;
        self
    }

    /// Sets the publish window start for the announcement.
    ///
    /// # Arguments
    /// - `publish_at` - When the announcement becomes visible
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn publish_at(mut self, publish_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.publish_at = publish_at;
        self
    }

    /// Sets the publish window end for the announcement.
    ///
    /// # Arguments
    /// - `expires_at` - When the announcement stops being visible
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn expires_at(mut self, expires_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the announcement entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::announcement::Model)` - Created announcement entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        let now = Utc::now();
        entity::announcement::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            audience: ActiveValue::Set(self.audience),
            is_published: ActiveValue::Set(self.is_published),
            publish_at: ActiveValue::Set(self.publish_at),
            expires_at: ActiveValue::Set(self.expires_at),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an announcement with default values for the specified author.
///
/// Shorthand for `AnnouncementFactory::new(db, created_by).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `created_by` - Admin ID that authored the announcement
///
/// # Returns
/// - `Ok(entity::announcement::Model)` - Created announcement entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let announcement = create_announcement(&db, admin.id).await?;
/// ```
pub async fn create_announcement(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db, created_by).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::admin::create_admin;

    #[tokio::test]
    async fn creates_announcement_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = create_admin(db).await?;
        let announcement = create_announcement(db, admin.id).await?;

        assert_eq!(announcement.created_by, admin.id);
        assert_eq!(announcement.audience, "all");
        assert!(!announcement.is_published);
        assert!(announcement.publish_at.is_none());

        Ok(())
    }
}
