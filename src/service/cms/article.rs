//! News article management and the public article surface.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::cms::article::NewsArticleRepository,
    dto::cms::{NewsArticleDto, PaginatedNewsArticlesDto},
    error::AppError,
    model::{
        audit::AuditEntryParams,
        cms::{CreateArticleParams, UpdateArticleParams},
    },
    service::audit::AuditService,
};

pub struct NewsArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets articles with pagination.
    ///
    /// # Arguments
    /// - `published_only` - The public listing sets this; the admin view
    ///   sees drafts
    pub async fn get_paginated(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNewsArticlesDto, AppError> {
        let (articles, total) = NewsArticleRepository::new(self.db)
            .get_paginated(published_only, page, per_page)
            .await?;

        Ok(PaginatedNewsArticlesDto {
            articles: articles.into_iter().map(NewsArticleDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets one article by id for the admin view.
    pub async fn get_by_id(&self, id: i32) -> Result<NewsArticleDto, AppError> {
        let Some(article) = NewsArticleRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        };

        Ok(NewsArticleDto::from(article))
    }

    /// Reads one published article by slug and counts the view.
    ///
    /// Drafts answer 404 on the public surface. The view counter is bumped
    /// after the read; the DTO reflects the count including this view.
    pub async fn read_published(&self, slug: &str) -> Result<NewsArticleDto, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        let article = repo
            .find_by_slug(slug)
            .await?
            .filter(|article| article.is_published);

        let Some(article) = article else {
            return Err(AppError::NotFound(format!("Article {} not found", slug)));
        };

        repo.increment_view_count(article.id).await?;

        Ok(NewsArticleDto::from(entity::news_article::Model {
            view_count: article.view_count + 1,
            ..article
        }))
    }

    /// Creates an article as a draft.
    ///
    /// # Returns
    /// - `Ok(NewsArticleDto)` - The created draft
    /// - `Err(AppError::Conflict)` - Slug already in use
    pub async fn create(&self, params: CreateArticleParams) -> Result<NewsArticleDto, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        if repo.find_by_slug(&params.slug).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Article with slug {} already exists",
                params.slug
            )));
        }

        let author_id = params.author_id;
        let article = repo.create(params).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(author_id), "cms.article.create", "news_article")
                    .resource_id(article.id)
                    .detail(json!({ "slug": article.slug })),
            )
            .await;

        Ok(NewsArticleDto::from(article))
    }

    /// Updates an article's content. The slug is immutable.
    pub async fn update(
        &self,
        acting_admin_id: i32,
        params: UpdateArticleParams,
    ) -> Result<NewsArticleDto, AppError> {
        let id = params.id;

        let Some(article) = NewsArticleRepository::new(self.db).update(params).await? else {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.article.update", "news_article")
                    .resource_id(id),
            )
            .await;

        Ok(NewsArticleDto::from(article))
    }

    /// Publishes or unpublishes an article. The first publish stamps
    /// `published_at`; later republishes keep the original date.
    pub async fn set_published(
        &self,
        acting_admin_id: i32,
        id: i32,
        is_published: bool,
    ) -> Result<NewsArticleDto, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        }

        repo.set_published(id, is_published).await?;

        let action = if is_published {
            "cms.article.publish"
        } else {
            "cms.article.unpublish"
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), action, "news_article")
                    .resource_id(id),
            )
            .await;

        self.get_by_id(id).await
    }

    /// Deletes an article.
    pub async fn delete(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        if !NewsArticleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        }

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "cms.article.delete", "news_article")
                    .resource_id(id),
            )
            .await;

        Ok(())
    }
}
