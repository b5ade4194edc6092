//! Arena catalog management.
//!
//! Manual CRUD over the arena table. Arenas start inactive so an admin can
//! review assets before they reach the game client; the pipeline-built ones
//! arrive through the generation worker and land here the same way.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::arena::ArenaRepository,
    dto::arena::{ArenaDto, PaginatedArenasDto},
    error::AppError,
    model::{
        arena::{CreateArenaParams, UpdateArenaParams},
        audit::AuditEntryParams,
    },
    service::audit::AuditService,
};

pub struct ArenaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArenaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets arenas with pagination.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedArenasDto, AppError> {
        let (arenas, total) = ArenaRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedArenasDto {
            arenas: arenas.into_iter().map(ArenaDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets one arena by id.
    pub async fn get_by_id(&self, id: i32) -> Result<ArenaDto, AppError> {
        let Some(arena) = ArenaRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Arena {} not found", id)));
        };

        Ok(ArenaDto::from(arena))
    }

    /// Creates an arena by hand, without the generation pipeline.
    pub async fn create(
        &self,
        acting_admin_id: i32,
        params: CreateArenaParams,
    ) -> Result<ArenaDto, AppError> {
        let arena = ArenaRepository::new(self.db).create(params).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "arena.create", "arena")
                    .resource_id(arena.id)
                    .detail(json!({ "name": arena.name })),
            )
            .await;

        Ok(ArenaDto::from(arena))
    }

    /// Updates an arena's fields.
    ///
    /// # Returns
    /// - `Ok(ArenaDto)` - The updated arena
    /// - `Err(AppError::NotFound)` - No arena with that id
    pub async fn update(
        &self,
        acting_admin_id: i32,
        params: UpdateArenaParams,
    ) -> Result<ArenaDto, AppError> {
        let id = params.id;

        let Some(arena) = ArenaRepository::new(self.db).update(params).await? else {
            return Err(AppError::NotFound(format!("Arena {} not found", id)));
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "arena.update", "arena")
                    .resource_id(id),
            )
            .await;

        Ok(ArenaDto::from(arena))
    }

    /// Activates or deactivates an arena for the game client.
    pub async fn set_active(
        &self,
        acting_admin_id: i32,
        id: i32,
        is_active: bool,
    ) -> Result<ArenaDto, AppError> {
        let repo = ArenaRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Arena {} not found", id)));
        }

        repo.set_active(id, is_active).await?;

        let action = if is_active {
            "arena.activate"
        } else {
            "arena.deactivate"
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), action, "arena").resource_id(id),
            )
            .await;

        self.get_by_id(id).await
    }

    /// Deletes an arena.
    ///
    /// # Returns
    /// - `Ok(())` - Arena deleted
    /// - `Err(AppError::NotFound)` - No arena with that id
    pub async fn delete(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        if !ArenaRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Arena {} not found", id)));
        }

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "arena.delete", "arena")
                    .resource_id(id),
            )
            .await;

        Ok(())
    }
}
