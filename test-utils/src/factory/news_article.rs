//! News article factory for creating test article entities.
//!
//! This module provides factory methods for creating news articles with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news articles with customizable fields.
///
/// Provides a builder pattern for creating article entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::news_article::NewsArticleFactory;
///
/// let article = NewsArticleFactory::new(&db, admin.id)
///     .slug("season-three-preview")
///     .published(true)
///     .build()
///     .await?;
/// ```
pub struct NewsArticleFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    summary: String,
    body: String,
    is_published: bool,
    published_at: Option<chrono::DateTime<Utc>>,
    view_count: i64,
    author_id: i32,
}

impl<'a> NewsArticleFactory<'a> {
    /// Creates a new NewsArticleFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"article-{id}"` where id is auto-incremented
    /// - title: `"Article {id}"`
    /// - is_published: `false`
    /// - view_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - Admin ID that authored the article
    ///
    /// # Returns
    /// - `NewsArticleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("article-{}", id),
            title: format!("Article {}", id),
            summary: "Test article summary".to_string(),
            body: "Test article body".to_string(),
            is_published: false,
            published_at: None,
            view_count: 0,
            author_id,
        }
    }

    /// Sets the slug for the article.
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

    /// Sets the title for the article.
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

    /// Sets whether the article is published.
    ///
    /// # Arguments
    /// - `published` - Whether the article is publicly visible
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn published(mut self, published: bool) -> Self {
        self.is_published = published;
        self
    }

    /// Sets the publication timestamp for the article.
    ///
    /// # Arguments
    /// - `published_at` - When the article went live
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn published_at(mut self, published_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Sets the view count for the article.
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

    /// Builds and inserts the news article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::news_article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::news_article::Model, DbErr> {
        let now = Utc::now();
        entity::news_article::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            summary: ActiveValue::Set(self.summary),
            body: ActiveValue::Set(self.body),
            hero_image_url: ActiveValue::Set(None),
            is_published: ActiveValue::Set(self.is_published),
            published_at: ActiveValue::Set(self.published_at),
            view_count: ActiveValue::Set(self.view_count),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news article with default values for the specified author.
///
/// Shorthand for `NewsArticleFactory::new(db, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - Admin ID that authored the article
///
/// # Returns
/// - `Ok(entity::news_article::Model)` - Created article entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let article = create_article(&db, admin.id).await?;
/// ```
pub async fn create_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::news_article::Model, DbErr> {
    NewsArticleFactory::new(db, author_id).build().await
}

/// Creates a news article that is already published.
///
/// Shorthand for
/// `NewsArticleFactory::new(db, author_id).published(true).published_at(Some(now)).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - Admin ID that authored the article
///
/// # Returns
/// - `Ok(entity::news_article::Model)` - Created article entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let article = create_published_article(&db, admin.id).await?;
/// ```
pub async fn create_published_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::news_article::Model, DbErr> {
    NewsArticleFactory::new(db, author_id)
        .published(true)
        .published_at(Some(Utc::now()))
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::admin::create_admin;

    #[tokio::test]
    async fn creates_article_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = create_admin(db).await?;
        let article = create_article(db, admin.id).await?;

        assert_eq!(article.author_id, admin.id);
        assert!(!article.is_published);
        assert_eq!(article.view_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_published_article() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = create_admin(db).await?;
        let article = create_published_article(db, admin.id).await?;

        assert!(article.is_published);
        assert!(article.published_at.is_some());

        Ok(())
    }
}
