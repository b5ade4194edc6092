//! Announcement management.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::cms::announcement::AnnouncementRepository,
    dto::cms::{AnnouncementDto, PaginatedAnnouncementsDto},
    error::AppError,
    model::{
        audit::AuditEntryParams,
        cms::{CreateAnnouncementParams, UpdateAnnouncementParams},
    },
    service::audit::AuditService,
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all announcements for the admin view, drafts included.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAnnouncementsDto, AppError> {
        let (announcements, total) = AnnouncementRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedAnnouncementsDto {
            announcements: announcements.into_iter().map(AnnouncementDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets announcements currently live: published, inside their window.
    pub async fn get_live(&self) -> Result<Vec<AnnouncementDto>, AppError> {
        let live = AnnouncementRepository::new(self.db).get_live().await?;

        Ok(live.into_iter().map(AnnouncementDto::from).collect())
    }

    /// Creates an announcement as a draft.
    ///
    /// # Returns
    /// - `Ok(AnnouncementDto)` - The created draft
    /// - `Err(AppError::BadRequest)` - Expiry precedes the publish time
    pub async fn create(
        &self,
        params: CreateAnnouncementParams,
    ) -> Result<AnnouncementDto, AppError> {
        if let (Some(publish_at), Some(expires_at)) = (params.publish_at, params.expires_at) {
            if expires_at <= publish_at {
                return Err(AppError::BadRequest(
                    "Announcement expiry must be after its publish time".to_string(),
                ));
            }
        }

        let created_by = params.created_by;
        let announcement = AnnouncementRepository::new(self.db).create(params).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(created_by), "cms.announcement.create", "announcement")
                    .resource_id(announcement.id)
                    .detail(json!({ "title": announcement.title })),
            )
            .await;

        Ok(AnnouncementDto::from(announcement))
    }

    /// Updates an announcement.
    pub async fn update(
        &self,
        acting_admin_id: i32,
        params: UpdateAnnouncementParams,
    ) -> Result<AnnouncementDto, AppError> {
        if let (Some(publish_at), Some(expires_at)) = (params.publish_at, params.expires_at) {
            if expires_at <= publish_at {
                return Err(AppError::BadRequest(
                    "Announcement expiry must be after its publish time".to_string(),
                ));
            }
        }

        let id = params.id;

        let Some(announcement) = AnnouncementRepository::new(self.db).update(params).await? else {
            return Err(AppError::NotFound(format!("Announcement {} not found", id)));
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.announcement.update", "announcement")
                    .resource_id(id),
            )
            .await;

        Ok(AnnouncementDto::from(announcement))
    }

    /// Publishes or unpublishes an announcement.
    pub async fn set_published(
        &self,
        acting_admin_id: i32,
        id: i32,
        is_published: bool,
    ) -> Result<AnnouncementDto, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Announcement {} not found", id)));
        }

        repo.set_published(id, is_published).await?;

        let action = if is_published {
            "cms.announcement.publish"
        } else {
            "cms.announcement.unpublish"
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), action, "announcement")
                    .resource_id(id),
            )
            .await;

        let updated = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Announcement {} not found", id)))?;

        Ok(AnnouncementDto::from(updated))
    }

    /// Deletes an announcement.
    pub async fn delete(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        if !AnnouncementRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Announcement {} not found", id)));
        }

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.announcement.delete", "announcement")
                    .resource_id(id),
            )
            .await;

        Ok(())
    }
}
