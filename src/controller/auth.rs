use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    dto::{
        admin::AdminDto,
        api::ErrorDto,
        auth::{BootstrapDto, LoginDto, TokenResponseDto},
    },
    error::AppError,
    middleware::auth::CurrentAdmin,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Authenticate an admin and issue a bearer token.
///
/// # Returns
/// - `200 OK` - Token, expiry, and the admin profile
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Correct credentials but the account is deactivated
#[utoipa::path(
    post,
    path = "/v1/admin/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = TokenResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Create the first super admin from a one-time setup code.
///
/// Only usable while the admin table is empty; the code is printed to the
/// server log on startup and expires after sixty seconds.
///
/// # Returns
/// - `201 Created` - Token for the new super admin
/// - `401 Unauthorized` - Wrong or expired setup code
/// - `409 Conflict` - An admin account already exists
#[utoipa::path(
    post,
    path = "/v1/admin/auth/bootstrap",
    tag = AUTH_TAG,
    request_body = BootstrapDto,
    responses(
        (status = 201, description = "First super admin created", body = TokenResponseDto),
        (status = 401, description = "Wrong or expired setup code", body = ErrorDto),
        (status = 409, description = "An admin already exists", body = ErrorDto),
    ),
)]
pub async fn bootstrap(
    State(state): State<AppState>,
    Json(payload): Json<BootstrapDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.tokens)
        .bootstrap(
            &state.setup_code_service,
            &payload.setup_code,
            &payload.email,
            &payload.username,
            &payload.password,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/admin/auth/me - Profile of the authenticated admin.
pub async fn me(
    Extension(current): Extension<CurrentAdmin>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(AdminDto::from(current.admin))))
}
