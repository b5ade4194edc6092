use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::ErrorDto,
        card::{CardTemplateDto, PaginatedCardTemplatesDto},
    },
    error::AppError,
    model::card::CardQuery,
    service::card::CardService,
    state::AppState,
};

/// Tag for grouping public catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[derive(Deserialize)]
pub struct CatalogParams {
    pub rarity: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match against the card name.
    pub q: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

/// Browse the public card catalog.
///
/// Published templates only, newest first.
#[utoipa::path(
    get,
    path = "/v1/catalog/cards",
    tag = CATALOG_TAG,
    params(
        ("rarity" = Option<String>, Query, description = "Filter by rarity"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("q" = Option<String>, Query, description = "Substring match on the card name"),
        ("page" = Option<u64>, Query, description = "Zero-indexed page"),
        ("per_page" = Option<u64>, Query, description = "Cards per page"),
    ),
    responses(
        (status = 200, description = "Page of published cards", body = PaginatedCardTemplatesDto),
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = CardQuery {
        rarity: params.rarity,
        category: params.category,
        q: params.q,
        published_only: true,
    };

    let cards = CardService::new(&state.db)
        .get_paginated(query, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(cards)))
}

/// One published card by slug.
#[utoipa::path(
    get,
    path = "/v1/catalog/cards/{slug}",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Card slug")),
    responses(
        (status = 200, description = "Published card", body = CardTemplateDto),
        (status = 404, description = "No published card with that slug", body = ErrorDto),
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .get_published_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(card)))
}
