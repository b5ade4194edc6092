use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{analytics::DashboardDto, api::ErrorDto},
    error::AppError,
    service::analytics::AnalyticsService,
    state::AppState,
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Platform dashboard counters.
#[utoipa::path(
    get,
    path = "/v1/admin/analytics/dashboard",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Current platform counters", body = DashboardDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Role lacks analytics permission", body = ErrorDto),
    ),
)]
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dashboard = AnalyticsService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
