//! News article repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::cms::{CreateArticleParams, UpdateArticleParams};

pub struct NewsArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateArticleParams,
    ) -> Result<entity::news_article::Model, DbErr> {
        let now = Utc::now();
        entity::news_article::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(params.slug),
            title: ActiveValue::Set(params.title),
            summary: ActiveValue::Set(params.summary),
            body: ActiveValue::Set(params.body),
            hero_image_url: ActiveValue::Set(params.hero_image_url),
            is_published: ActiveValue::Set(false),
            published_at: ActiveValue::Set(None),
            view_count: ActiveValue::Set(0),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::news_article::Model>, DbErr> {
        entity::prelude::NewsArticle::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::news_article::Model>, DbErr> {
        entity::prelude::NewsArticle::find()
            .filter(entity::news_article::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets articles with pagination, newest first.
    ///
    /// # Arguments
    /// - `published_only` - Public listing sets this; the admin view sees drafts
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of articles per page
    ///
    /// # Returns
    /// - `Ok((articles, total))` - Page of articles and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::news_article::Model>, u64), DbErr> {
        let mut find = entity::prelude::NewsArticle::find();

        if published_only {
            find = find.filter(entity::news_article::Column::IsPublished.eq(true));
        }

        let paginator = find
            .order_by_desc(entity::news_article::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let articles = paginator.fetch_page(page).await?;

        Ok((articles, total))
    }

    pub async fn update(
        &self,
        params: UpdateArticleParams,
    ) -> Result<Option<entity::news_article::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut model: entity::news_article::ActiveModel = existing.into();
        model.title = ActiveValue::Set(params.title);
        model.summary = ActiveValue::Set(params.summary);
        model.body = ActiveValue::Set(params.body);
        model.hero_image_url = ActiveValue::Set(params.hero_image_url);
        model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(model.update(self.db).await?))
    }

    /// Sets the published flag. The first publish stamps `published_at`;
    /// republishing later keeps the original date.
    pub async fn set_published(&self, id: i32, is_published: bool) -> Result<(), DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(());
        };

        let first_publish = is_published && existing.published_at.is_none();

        let mut model: entity::news_article::ActiveModel = existing.into();
        model.is_published = ActiveValue::Set(is_published);
        if first_publish {
            model.published_at = ActiveValue::Set(Some(Utc::now()));
        }
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await?;

        Ok(())
    }

    /// Bumps the view counter with a single SQL increment.
    ///
    /// Last-write-wins under concurrency is acceptable for a vanity counter;
    /// the increment form just keeps parallel reads from losing counts.
    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::NewsArticle::update_many()
            .filter(entity::news_article::Column::Id.eq(id))
            .col_expr(
                entity::news_article::Column::ViewCount,
                Expr::col(entity::news_article::Column::ViewCount).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::NewsArticle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
