//! Admin CMS management handlers.
//!
//! Announcements, news articles, and video items share the same shape:
//! list, create, update, delete, publish, unpublish. The public read side
//! lives in `controller::cms`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    controller::PaginationParams,
    dto::cms::{
        CreateAnnouncementDto, CreateNewsArticleDto, CreateVideoItemDto, UpdateAnnouncementDto,
        UpdateNewsArticleDto, UpdateVideoItemDto,
    },
    error::AppError,
    middleware::auth::CurrentAdmin,
    model::cms::{
        CreateAnnouncementParams, CreateArticleParams, CreateVideoParams,
        UpdateAnnouncementParams, UpdateArticleParams, UpdateVideoParams,
    },
    service::cms::{AnnouncementService, NewsArticleService, VideoItemService},
    state::AppState,
};

/// Tag for grouping CMS endpoints in OpenAPI documentation
pub static CMS_TAG: &str = "cms";

// Announcements

/// GET /v1/admin/cms/announcements - List announcements, drafts included.
pub async fn list_announcements(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AnnouncementService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(announcements)))
}

/// POST /v1/admin/cms/announcements - Create an announcement draft.
pub async fn create_announcement(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let announcement = AnnouncementService::new(&state.db)
        .create(CreateAnnouncementParams::from_dto(current.admin.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /v1/admin/cms/announcements/{id} - Update an announcement.
pub async fn update_announcement(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let announcement = AnnouncementService::new(&state.db)
        .update(current.admin.id, UpdateAnnouncementParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(announcement)))
}

/// DELETE /v1/admin/cms/announcements/{id} - Delete an announcement.
pub async fn delete_announcement(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AnnouncementService::new(&state.db)
        .delete(current.admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/cms/announcements/{id}/publish
pub async fn publish_announcement(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let announcement = AnnouncementService::new(&state.db)
        .set_published(current.admin.id, id, true)
        .await?;

    Ok((StatusCode::OK, Json(announcement)))
}

/// POST /v1/admin/cms/announcements/{id}/unpublish
pub async fn unpublish_announcement(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let announcement = AnnouncementService::new(&state.db)
        .set_published(current.admin.id, id, false)
        .await?;

    Ok((StatusCode::OK, Json(announcement)))
}

// News articles

/// GET /v1/admin/cms/articles - List articles, drafts included.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let articles = NewsArticleService::new(&state.db)
        .get_paginated(false, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(articles)))
}

/// POST /v1/admin/cms/articles - Create an article draft.
pub async fn create_article(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<CreateNewsArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsArticleService::new(&state.db)
        .create(CreateArticleParams::from_dto(current.admin.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /v1/admin/cms/articles/{id} - Update an article. The slug is fixed.
pub async fn update_article(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNewsArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsArticleService::new(&state.db)
        .update(current.admin.id, UpdateArticleParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(article)))
}

/// DELETE /v1/admin/cms/articles/{id} - Delete an article.
pub async fn delete_article(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    NewsArticleService::new(&state.db)
        .delete(current.admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/cms/articles/{id}/publish
pub async fn publish_article(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsArticleService::new(&state.db)
        .set_published(current.admin.id, id, true)
        .await?;

    Ok((StatusCode::OK, Json(article)))
}

/// POST /v1/admin/cms/articles/{id}/unpublish
pub async fn unpublish_article(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsArticleService::new(&state.db)
        .set_published(current.admin.id, id, false)
        .await?;

    Ok((StatusCode::OK, Json(article)))
}

// Videos

/// GET /v1/admin/cms/videos - List videos, drafts included.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let videos = VideoItemService::new(&state.db)
        .get_paginated(false, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(videos)))
}

/// POST /v1/admin/cms/videos - Create a video draft.
pub async fn create_video(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<CreateVideoItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let video = VideoItemService::new(&state.db)
        .create(current.admin.id, CreateVideoParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /v1/admin/cms/videos/{id} - Update a video.
pub async fn update_video(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVideoItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let video = VideoItemService::new(&state.db)
        .update(current.admin.id, UpdateVideoParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(video)))
}

/// DELETE /v1/admin/cms/videos/{id} - Delete a video.
pub async fn delete_video(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    VideoItemService::new(&state.db)
        .delete(current.admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/cms/videos/{id}/publish
pub async fn publish_video(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let video = VideoItemService::new(&state.db)
        .set_published(current.admin.id, id, true)
        .await?;

    Ok((StatusCode::OK, Json(video)))
}

/// POST /v1/admin/cms/videos/{id}/unpublish
pub async fn unpublish_video(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let video = VideoItemService::new(&state.db)
        .set_published(current.admin.id, id, false)
        .await?;

    Ok((StatusCode::OK, Json(video)))
}
