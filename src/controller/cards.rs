use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    dto::card::{
        ActivateInstanceDto, CreateCardTemplateDto, PaginatedNfcInstancesDto,
        ProvisionInstancesDto, UpdateCardTemplateDto,
    },
    error::AppError,
    middleware::auth::CurrentAdmin,
    model::card::{CardQuery, CreateCardTemplateParams, UpdateCardTemplateParams},
    service::card::CardService,
    state::AppState,
};

/// Tag for grouping card catalog endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "cards";

#[derive(Deserialize)]
pub struct CardListParams {
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

/// GET /v1/admin/cards - List card templates, drafts included.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CardListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = CardQuery {
        rarity: params.rarity,
        category: params.category,
        q: params.q,
        published_only: false,
    };

    let cards = CardService::new(&state.db)
        .get_paginated(query, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(cards)))
}

/// GET /v1/admin/cards/{id} - One template by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(card)))
}

/// POST /v1/admin/cards - Create a card template.
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<CreateCardTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .create(current.admin.id, CreateCardTemplateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// PUT /v1/admin/cards/{id} - Update a card template.
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCardTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .update(current.admin.id, UpdateCardTemplateParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(card)))
}

/// DELETE /v1/admin/cards/{id} - Delete a template without minted instances.
pub async fn delete(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CardService::new(&state.db).delete(current.admin.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/cards/{id}/publish - Publish a template to the catalog.
pub async fn publish(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .set_published(current.admin.id, id, true)
        .await?;

    Ok((StatusCode::OK, Json(card)))
}

/// POST /v1/admin/cards/{id}/unpublish - Pull a template from the catalog.
pub async fn unpublish(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .set_published(current.admin.id, id, false)
        .await?;

    Ok((StatusCode::OK, Json(card)))
}

/// GET /v1/admin/cards/{id}/instances - List a template's NFC instances.
pub async fn list_instances(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<crate::controller::PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (instances, total) = CardService::new(&state.db)
        .get_instances(id, params.page, params.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedNfcInstancesDto {
            instances,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages: total.div_ceil(params.per_page.max(1)),
        }),
    ))
}

/// POST /v1/admin/cards/{id}/instances - Provision a batch of NFC instances.
pub async fn provision_instances(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<ProvisionInstancesDto>,
) -> Result<impl IntoResponse, AppError> {
    let instances = CardService::new(&state.db)
        .provision_instances(current.admin.id, id, payload.count)
        .await?;

    Ok((StatusCode::CREATED, Json(instances)))
}

/// POST /v1/admin/nfc/activate - Activate a provisioned instance onto a player.
pub async fn activate_instance(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<ActivateInstanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let instance = CardService::new(&state.db)
        .activate_instance(current.admin.id, &payload.nfc_uid, payload.player_id)
        .await?;

    Ok((StatusCode::OK, Json(instance)))
}

/// POST /v1/admin/nfc/{id}/revoke - Revoke an instance.
pub async fn revoke_instance(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CardService::new(&state.db)
        .revoke_instance(current.admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
