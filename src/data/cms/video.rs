//! Video item repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::cms::{CreateVideoParams, UpdateVideoParams};

pub struct VideoItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateVideoParams) -> Result<entity::video_item::Model, DbErr> {
        let now = Utc::now();
        entity::video_item::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            video_url: ActiveValue::Set(params.video_url),
            thumbnail_url: ActiveValue::Set(params.thumbnail_url),
            duration_seconds: ActiveValue::Set(params.duration_seconds),
            is_published: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::video_item::Model>, DbErr> {
        entity::prelude::VideoItem::find_by_id(id).one(self.db).await
    }

    /// Gets videos with pagination, newest first.
    pub async fn get_paginated(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::video_item::Model>, u64), DbErr> {
        let mut find = entity::prelude::VideoItem::find();

        if published_only {
            find = find.filter(entity::video_item::Column::IsPublished.eq(true));
        }

        let paginator = find
            .order_by_desc(entity::video_item::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let videos = paginator.fetch_page(page).await?;

        Ok((videos, total))
    }

    pub async fn update(
        &self,
        params: UpdateVideoParams,
    ) -> Result<Option<entity::video_item::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut model: entity::video_item::ActiveModel = existing.into();
        model.title = ActiveValue::Set(params.title);
        model.description = ActiveValue::Set(params.description);
        model.video_url = ActiveValue::Set(params.video_url);
        model.thumbnail_url = ActiveValue::Set(params.thumbnail_url);
        model.duration_seconds = ActiveValue::Set(params.duration_seconds);
        model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(model.update(self.db).await?))
    }

    pub async fn set_published(&self, id: i32, is_published: bool) -> Result<(), DbErr> {
        entity::prelude::VideoItem::update_many()
            .filter(entity::video_item::Column::Id.eq(id))
            .col_expr(
                entity::video_item::Column::IsPublished,
                Expr::value(is_published),
            )
            .col_expr(entity::video_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Bumps the view counter with a single SQL increment.
    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::VideoItem::update_many()
            .filter(entity::video_item::Column::Id.eq(id))
            .col_expr(
                entity::video_item::Column::ViewCount,
                Expr::col(entity::video_item::Column::ViewCount).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::VideoItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
