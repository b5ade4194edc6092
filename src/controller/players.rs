use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::ErrorDto,
        player::{BanPlayerDto, PaginatedPlayersDto, PlayerDetailDto, WarnPlayerDto},
    },
    error::AppError,
    middleware::auth::CurrentAdmin,
    model::player::{BanPlayerParams, PlayerQuery, WarnPlayerParams},
    service::player::PlayerService,
    state::AppState,
};

/// Tag for grouping player moderation endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "players";

#[derive(Deserialize)]
pub struct PlayerListParams {
    /// Case-insensitive substring match against email and display name.
    pub q: Option<String>,
    /// Restrict to banned (true) or not-banned (false) players.
    pub banned: Option<bool>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

/// List players with search and ban filtering.
///
/// # Returns
/// - `200 OK` - Page of players matching the filters
#[utoipa::path(
    get,
    path = "/v1/admin/players",
    tag = PLAYER_TAG,
    params(
        ("q" = Option<String>, Query, description = "Substring match on email or display name"),
        ("banned" = Option<bool>, Query, description = "Filter by ban state"),
        ("page" = Option<u64>, Query, description = "Zero-indexed page"),
        ("per_page" = Option<u64>, Query, description = "Players per page"),
    ),
    responses(
        (status = 200, description = "Page of players", body = PaginatedPlayersDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Role lacks player view permission", body = ErrorDto),
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PlayerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = PlayerQuery {
        q: params.q,
        banned: params.banned,
    };

    let players = PlayerService::new(&state.db)
        .get_paginated(query, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Player profile with the full moderation history.
///
/// # Returns
/// - `200 OK` - Profile, warnings, and moderation actions
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    get,
    path = "/v1/admin/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player detail", body = PlayerDetailDto),
        (status = 404, description = "Player not found", body = ErrorDto),
    ),
)]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = PlayerService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// POST /v1/admin/players/{id}/warn - Issue a warning.
pub async fn warn(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<WarnPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let warning = PlayerService::new(&state.db)
        .warn(WarnPlayerParams {
            player_id: id,
            admin_id: current.admin.id,
            reason: payload.reason,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(warning)))
}

/// POST /v1/admin/players/{id}/ban - Ban a player.
pub async fn ban(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<BanPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .ban(BanPlayerParams {
            player_id: id,
            admin_id: current.admin.id,
            reason: payload.reason,
            expires_at: payload.expires_at,
        })
        .await?;

    Ok((StatusCode::OK, Json(player)))
}

/// POST /v1/admin/players/{id}/unban - Lift a ban.
pub async fn unban(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .unban(id, current.admin.id)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}
