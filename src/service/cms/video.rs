//! Video item management and the public video surface.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::cms::video::VideoItemRepository,
    dto::cms::{PaginatedVideoItemsDto, VideoItemDto},
    error::AppError,
    model::{
        audit::AuditEntryParams,
        cms::{CreateVideoParams, UpdateVideoParams},
    },
    service::audit::AuditService,
};

pub struct VideoItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets videos with pagination.
    pub async fn get_paginated(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedVideoItemsDto, AppError> {
        let (videos, total) = VideoItemRepository::new(self.db)
            .get_paginated(published_only, page, per_page)
            .await?;

        Ok(PaginatedVideoItemsDto {
            videos: videos.into_iter().map(VideoItemDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets one video by id for the admin view.
    pub async fn get_by_id(&self, id: i32) -> Result<VideoItemDto, AppError> {
        let Some(video) = VideoItemRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        };

        Ok(VideoItemDto::from(video))
    }

    /// Reads one published video and counts the view.
    pub async fn watch_published(&self, id: i32) -> Result<VideoItemDto, AppError> {
        let repo = VideoItemRepository::new(self.db);

        let video = repo.find_by_id(id).await?.filter(|video| video.is_published);

        let Some(video) = video else {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        };

        repo.increment_view_count(video.id).await?;

        Ok(VideoItemDto::from(entity::video_item::Model {
            view_count: video.view_count + 1,
            ..video
        }))
    }

    /// Creates a video item as a draft.
    pub async fn create(
        &self,
        acting_admin_id: i32,
        params: CreateVideoParams,
    ) -> Result<VideoItemDto, AppError> {
        let video = VideoItemRepository::new(self.db).create(params).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.video.create", "video_item")
                    .resource_id(video.id)
                    .detail(json!({ "title": video.title })),
            )
            .await;

        Ok(VideoItemDto::from(video))
    }

    /// Updates a video item.
    pub async fn update(
        &self,
        acting_admin_id: i32,
        params: UpdateVideoParams,
    ) -> Result<VideoItemDto, AppError> {
        let id = params.id;

        let Some(video) = VideoItemRepository::new(self.db).update(params).await? else {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.video.update", "video_item")
                    .resource_id(id),
            )
            .await;

        Ok(VideoItemDto::from(video))
    }

    /// Publishes or unpublishes a video.
    pub async fn set_published(
        &self,
        acting_admin_id: i32,
        id: i32,
        is_published: bool,
    ) -> Result<VideoItemDto, AppError> {
        let repo = VideoItemRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        }

        repo.set_published(id, is_published).await?;

        let action = if is_published {
            "cms.video.publish"
        } else {
            "cms.video.unpublish"
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), action, "video_item").resource_id(id),
            )
            .await;

        self.get_by_id(id).await
    }

    /// Deletes a video item.
    pub async fn delete(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        if !VideoItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        }

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.video.delete", "video_item")
                    .resource_id(id),
            )
            .await;

        Ok(())
    }
}
