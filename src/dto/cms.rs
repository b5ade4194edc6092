use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub audience: String,
    pub is_published: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<entity::announcement::Model> for AnnouncementDto {
    fn from(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            audience: entity.audience,
            is_published: entity.is_published,
            publish_at: entity.publish_at,
            expires_at: entity.expires_at,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub body: String,
    /// Target audience, defaults to "all".
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_audience() -> String {
    "all".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateAnnouncementDto {
    pub title: String,
    pub body: String,
    pub audience: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NewsArticleDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image_url: Option<String>,
    pub is_published: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub author_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<entity::news_article::Model> for NewsArticleDto {
    fn from(entity: entity::news_article::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            summary: entity.summary,
            body: entity.body,
            hero_image_url: entity.hero_image_url,
            is_published: entity.is_published,
            published_at: entity.published_at,
            view_count: entity.view_count,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateNewsArticleDto {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image_url: Option<String>,
}

/// Update payload. The slug is fixed at creation because public article URLs
/// reference it.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateNewsArticleDto {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VideoItemDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: i32,
    pub is_published: bool,
    pub view_count: i64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<entity::video_item::Model> for VideoItemDto {
    fn from(entity: entity::video_item::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            video_url: entity.video_url,
            thumbnail_url: entity.thumbnail_url,
            duration_seconds: entity.duration_seconds,
            is_published: entity.is_published,
            view_count: entity.view_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateVideoItemDto {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration_seconds: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateVideoItemDto {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAnnouncementsDto {
    pub announcements: Vec<AnnouncementDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedNewsArticlesDto {
    pub articles: Vec<NewsArticleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedVideoItemsDto {
    pub videos: Vec<VideoItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
