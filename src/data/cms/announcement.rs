//! Announcement repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::cms::{CreateAnnouncementParams, UpdateAnnouncementParams};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAnnouncementParams,
    ) -> Result<entity::announcement::Model, DbErr> {
        let now = Utc::now();
        entity::announcement::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            audience: ActiveValue::Set(params.audience),
            is_published: ActiveValue::Set(false),
            publish_at: ActiveValue::Set(params.publish_at),
            expires_at: ActiveValue::Set(params.expires_at),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all announcements with pagination, newest first. Admin view;
    /// includes drafts and expired entries.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::announcement::Model>, u64), DbErr> {
        let paginator = entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let announcements = paginator.fetch_page(page).await?;

        Ok((announcements, total))
    }

    /// Gets announcements currently live for the public surface.
    ///
    /// Live means published, past `publish_at` (or no window start), and
    /// before `expires_at` (or no expiry).
    pub async fn get_live(&self) -> Result<Vec<entity::announcement::Model>, DbErr> {
        let now = Utc::now();

        entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::IsPublished.eq(true))
            .filter(
                Condition::any()
                    .add(entity::announcement::Column::PublishAt.is_null())
                    .add(entity::announcement::Column::PublishAt.lte(now)),
            )
            .filter(
                Condition::any()
                    .add(entity::announcement::Column::ExpiresAt.is_null())
                    .add(entity::announcement::Column::ExpiresAt.gt(now)),
            )
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        params: UpdateAnnouncementParams,
    ) -> Result<Option<entity::announcement::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut model: entity::announcement::ActiveModel = existing.into();
        model.title = ActiveValue::Set(params.title);
        model.body = ActiveValue::Set(params.body);
        model.audience = ActiveValue::Set(params.audience);
        model.publish_at = ActiveValue::Set(params.publish_at);
        model.expires_at = ActiveValue::Set(params.expires_at);
        model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(model.update(self.db).await?))
    }

    pub async fn set_published(&self, id: i32, is_published: bool) -> Result<(), DbErr> {
        entity::prelude::Announcement::update_many()
            .filter(entity::announcement::Column::Id.eq(id))
            .col_expr(
                entity::announcement::Column::IsPublished,
                Expr::value(is_published),
            )
            .col_expr(
                entity::announcement::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
