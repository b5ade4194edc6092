//! Video item factory for creating test video entities.
//!
//! This module provides factory methods for creating video items with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test video items with customizable fields.
///
/// Provides a builder pattern for creating video entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::video_item::VideoItemFactory;
///
/// let video = VideoItemFactory::new(&db)
///     .title("Deck building basics")
///     .published(true)
///     .build()
///     .await?;
/// ```
pub struct VideoItemFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    video_url: String,
    duration_seconds: i32,
    is_published: bool,
    view_count: i64,
}

impl<'a> VideoItemFactory<'a> {
    /// Creates a new VideoItemFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Video {id}"` where id is auto-incremented
    /// - video_url: `"https://cdn.deckport.io/videos/{id}.mp4"`
    /// - duration_seconds: `120`
    /// - is_published: `false`
    /// - view_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `VideoItemFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Video {}", id),
            description: "Test video description".to_string(),
            video_url: format!("https://cdn.deckport.io/videos/{}.mp4", id),
            duration_seconds: 120,
            is_published: false,
            view_count: 0,
        }
    }

    /// Sets the title for the video.
    ///
    /// # Arguments
    /// - `title` - Display title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets whether the video is published.
    ///
    /// # Arguments
    /// - `published` - Whether the video is publicly visible
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn published(mut self, published: bool) -> Self {
        self.is_published = published;
        self
    }

    /// Sets the view count for the video.
    ///
    /// # Arguments
    /// - `view_count` - Accumulated view total
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn view_count(mut self, view_count: i64) -> Self {
        self.view_count = view_count;
        self
    }

    /// Builds and inserts the video item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::video_item::Model)` - Created video entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::video_item::Model, DbErr> {
        let now = Utc::now();
        entity::video_item::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            video_url: ActiveValue::Set(self.video_url),
            thumbnail_url: ActiveValue::Set(None),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            is_published: ActiveValue::Set(self.is_published),
            view_count: ActiveValue::Set(self.view_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a video item with default values.
///
/// Shorthand for `VideoItemFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::video_item::Model)` - Created video entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let video = create_video(&db).await?;
/// ```
pub async fn create_video(db: &DatabaseConnection) -> Result<entity::video_item::Model, DbErr> {
    VideoItemFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_video_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(VideoItem)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let video = create_video(db).await?;

        assert!(!video.title.is_empty());
        assert!(video.video_url.ends_with(".mp4"));
        assert!(!video.is_published);
        assert_eq!(video.view_count, 0);

        Ok(())
    }
}
