use chrono::{DateTime, Utc};

use crate::dto::cms::{
    CreateAnnouncementDto, CreateNewsArticleDto, CreateVideoItemDto, UpdateAnnouncementDto,
    UpdateNewsArticleDto, UpdateVideoItemDto,
};

#[derive(Debug, Clone)]
pub struct CreateAnnouncementParams {
    pub title: String,
    pub body: String,
    pub audience: String,
    pub publish_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Admin creating the announcement.
    pub created_by: i32,
}

impl CreateAnnouncementParams {
    pub fn from_dto(created_by: i32, dto: CreateAnnouncementDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
            audience: dto.audience,
            publish_at: dto.publish_at,
            expires_at: dto.expires_at,
            created_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAnnouncementParams {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub audience: String,
    pub publish_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UpdateAnnouncementParams {
    pub fn from_dto(id: i32, dto: UpdateAnnouncementDto) -> Self {
        Self {
            id,
            title: dto.title,
            body: dto.body,
            audience: dto.audience,
            publish_at: dto.publish_at,
            expires_at: dto.expires_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image_url: Option<String>,
    /// Admin authoring the article.
    pub author_id: i32,
}

impl CreateArticleParams {
    pub fn from_dto(author_id: i32, dto: CreateNewsArticleDto) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            summary: dto.summary,
            body: dto.body,
            hero_image_url: dto.hero_image_url,
            author_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateArticleParams {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image_url: Option<String>,
}

impl UpdateArticleParams {
    pub fn from_dto(id: i32, dto: UpdateNewsArticleDto) -> Self {
        Self {
            id,
            title: dto.title,
            summary: dto.summary,
            body: dto.body,
            hero_image_url: dto.hero_image_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVideoParams {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: i32,
}

impl CreateVideoParams {
    pub fn from_dto(dto: CreateVideoItemDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            video_url: dto.video_url,
            thumbnail_url: dto.thumbnail_url,
            duration_seconds: dto.duration_seconds,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateVideoParams {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: i32,
}

impl UpdateVideoParams {
    pub fn from_dto(id: i32, dto: UpdateVideoItemDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            video_url: dto.video_url,
            thumbnail_url: dto.thumbnail_url,
            duration_seconds: dto.duration_seconds,
        }
    }
}
