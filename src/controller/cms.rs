//! Public CMS read handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationParams,
    dto::{
        api::ErrorDto,
        cms::{AnnouncementDto, NewsArticleDto, VideoItemDto},
    },
    error::AppError,
    service::cms::{AnnouncementService, NewsArticleService, VideoItemService},
    state::AppState,
};

use crate::controller::cms_admin::CMS_TAG;

/// Announcements currently live for players.
#[utoipa::path(
    get,
    path = "/v1/cms/announcements",
    tag = CMS_TAG,
    responses(
        (status = 200, description = "Live announcements, newest first", body = [AnnouncementDto]),
    ),
)]
pub async fn live_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AnnouncementService::new(&state.db).get_live().await?;

    Ok((StatusCode::OK, Json(announcements)))
}

/// GET /v1/cms/articles - Published articles, newest first.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let articles = NewsArticleService::new(&state.db)
        .get_paginated(true, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(articles)))
}

/// Read one published article by slug.
///
/// Counts the view.
#[utoipa::path(
    get,
    path = "/v1/cms/articles/{slug}",
    tag = CMS_TAG,
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article", body = NewsArticleDto),
        (status = 404, description = "No published article with that slug", body = ErrorDto),
    ),
)]
pub async fn read_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsArticleService::new(&state.db)
        .read_published(&slug)
        .await?;

    Ok((StatusCode::OK, Json(article)))
}

/// GET /v1/cms/videos - Published videos, newest first.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let videos = VideoItemService::new(&state.db)
        .get_paginated(true, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(videos)))
}

/// Watch one published video. Counts the view.
#[utoipa::path(
    get,
    path = "/v1/cms/videos/{id}",
    tag = CMS_TAG,
    params(("id" = i32, Path, description = "Video id")),
    responses(
        (status = 200, description = "Published video", body = VideoItemDto),
        (status = 404, description = "No published video with that id", body = ErrorDto),
    ),
)]
pub async fn watch_video(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let video = VideoItemService::new(&state.db).watch_published(id).await?;

    Ok((StatusCode::OK, Json(video)))
}
