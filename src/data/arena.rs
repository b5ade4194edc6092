//! Arena repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::arena::{CreateArenaParams, UpdateArenaParams};

pub struct ArenaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArenaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an arena. New arenas start inactive until an admin flips them
    /// on, whether they were authored by hand or by the generation pipeline.
    pub async fn create(&self, params: CreateArenaParams) -> Result<entity::arena::Model, DbErr> {
        entity::arena::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            theme: ActiveValue::Set(params.theme),
            description: ActiveValue::Set(params.description),
            background_url: ActiveValue::Set(params.background_url),
            video_url: ActiveValue::Set(params.video_url),
            voice_intro_url: ActiveValue::Set(params.voice_intro_url),
            music_url: ActiveValue::Set(params.music_url),
            special_rules: ActiveValue::Set(params.special_rules),
            difficulty: ActiveValue::Set(params.difficulty),
            is_active: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::arena::Model>, DbErr> {
        entity::prelude::Arena::find_by_id(id).one(self.db).await
    }

    /// Gets arenas with pagination, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::arena::Model>, u64), DbErr> {
        let paginator = entity::prelude::Arena::find()
            .order_by_desc(entity::arena::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let arenas = paginator.fetch_page(page).await?;

        Ok((arenas, total))
    }

    /// Updates the mutable fields of an arena.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated arena
    /// - `Ok(None)` - No arena with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateArenaParams,
    ) -> Result<Option<entity::arena::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut model: entity::arena::ActiveModel = existing.into();
        model.name = ActiveValue::Set(params.name);
        model.theme = ActiveValue::Set(params.theme);
        model.description = ActiveValue::Set(params.description);
        model.background_url = ActiveValue::Set(params.background_url);
        model.video_url = ActiveValue::Set(params.video_url);
        model.voice_intro_url = ActiveValue::Set(params.voice_intro_url);
        model.music_url = ActiveValue::Set(params.music_url);
        model.special_rules = ActiveValue::Set(params.special_rules);
        model.difficulty = ActiveValue::Set(params.difficulty);

        Ok(Some(model.update(self.db).await?))
    }

    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<(), DbErr> {
        entity::prelude::Arena::update_many()
            .filter(entity::arena::Column::Id.eq(id))
            .col_expr(entity::arena::Column::IsActive, Expr::value(is_active))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes an arena.
    ///
    /// # Returns
    /// - `Ok(true)` - Arena existed and was deleted
    /// - `Ok(false)` - No arena with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Arena::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
