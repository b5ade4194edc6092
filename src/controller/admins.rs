use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    controller::PaginationParams,
    dto::admin::{CreateAdminDto, ResetPasswordDto, UpdateAdminRoleDto},
    error::AppError,
    middleware::auth::CurrentAdmin,
    service::admin::AdminService,
    state::AppState,
};

/// Tag for grouping admin management endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admins";

/// GET /v1/admin/admins - List admin accounts.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let admins = AdminService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(admins)))
}

/// POST /v1/admin/admins - Create an admin account.
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AdminService::new(&state.db)
        .create(
            current.admin.id,
            &payload.email,
            &payload.username,
            &payload.password,
            payload.role,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

/// PUT /v1/admin/admins/{id}/role - Change an admin's role.
pub async fn set_role(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdminRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AdminService::new(&state.db)
        .set_role(current.admin.id, id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(admin)))
}

/// POST /v1/admin/admins/{id}/activate - Reactivate an admin account.
pub async fn activate(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminService::new(&state.db)
        .set_active(current.admin.id, id, true)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/admins/{id}/deactivate - Deactivate an admin account.
pub async fn deactivate(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminService::new(&state.db)
        .set_active(current.admin.id, id, false)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/admins/{id}/password - Reset an admin's password.
pub async fn reset_password(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i32>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminService::new(&state.db)
        .reset_password(current.admin.id, id, &payload.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
