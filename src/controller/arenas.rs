use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    controller::PaginationParams,
    dto::{
        api::ErrorDto,
        arena::{CreateArenaDto, UpdateArenaDto},
        generation::{GenerateArenaDto, GenerationAcceptedDto},
    },
    error::AppError,
    middleware::auth::CurrentAdmin,
    model::arena::{CreateArenaParams, UpdateArenaParams},
    service::{arena::ArenaService, generation::GenerationService},
    state::AppState,
};

/// Tag for grouping arena endpoints in OpenAPI documentation
pub static ARENA_TAG: &str = "arenas";

/// GET /v1/admin/arenas - List arenas.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let arenas = ArenaService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(arenas)))
}

/// GET /v1/admin/arenas/{id} - One arena by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let arena = ArenaService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(arena)))
}

/// POST /v1/admin/arenas - Create an arena by hand.
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<CreateArenaDto>,
) -> Result<impl IntoResponse, AppError> {
    let arena = ArenaService::new(&state.db)
        .create(current.admin.id, CreateArenaParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(arena)))
}

/// PUT /v1/admin/arenas/{id} - Update an arena.
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArenaDto>,
) -> Result<impl IntoResponse, AppError> {
    let arena = ArenaService::new(&state.db)
        .update(current.admin.id, UpdateArenaParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(arena)))
}

/// DELETE /v1/admin/arenas/{id} - Delete an arena.
pub async fn delete(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ArenaService::new(&state.db)
        .delete(current.admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/arenas/{id}/activate - Toggle an arena for the game client.
///
/// The body is `{"is_active": bool}`; omitting it activates.
pub async fn activate(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    payload: Option<Json<serde_json::Value>>,
) -> Result<impl IntoResponse, AppError> {
    let is_active = payload
        .as_ref()
        .and_then(|Json(v)| v.get("is_active"))
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(true);

    let arena = ArenaService::new(&state.db)
        .set_active(current.admin.id, id, is_active)
        .await?;

    Ok((StatusCode::OK, Json(arena)))
}

/// Generate a complete arena through the asset pipeline.
///
/// Queues a background job and answers immediately; poll the jobs endpoints
/// with the returned id for progress.
///
/// # Returns
/// - `202 Accepted` - Job queued, pipeline running
/// - `400 Bad Request` - Empty name/theme or difficulty out of range
#[utoipa::path(
    post,
    path = "/v1/admin/arenas/generate",
    tag = ARENA_TAG,
    request_body = GenerateArenaDto,
    responses(
        (status = 202, description = "Generation job queued", body = GenerationAcceptedDto),
        (status = 400, description = "Invalid generation request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Role lacks arena generate permission", body = ErrorDto),
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<GenerateArenaDto>,
) -> Result<impl IntoResponse, AppError> {
    let accepted = GenerationService::new(&state)
        .start_arena(current.admin.id, payload)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// GET /v1/admin/arenas/jobs - List generation jobs.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let jobs = GenerationService::new(&state)
        .get_jobs(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(jobs)))
}

/// GET /v1/admin/arenas/jobs/{id} - One job's status and artifacts.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let job = GenerationService::new(&state).get_job(id).await?;

    Ok((StatusCode::OK, Json(job)))
}
