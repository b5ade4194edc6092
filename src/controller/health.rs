use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ConnectionTrait, Statement};

use crate::{dto::api::HealthDto, error::AppError, state::AppState};

/// Tag for grouping system endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Service health probe.
///
/// Pings the database with a trivial statement so the probe reflects more
/// than process liveness. Database failure still answers 200 with the
/// database field set to "unreachable"; load balancers that should stop
/// routing on database loss key off the body.
#[utoipa::path(
    get,
    path = "/v1/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service health with database status", body = HealthDto),
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ping = state
        .db
        .execute_raw(Statement::from_string(
            state.db.get_database_backend(),
            "SELECT 1",
        ))
        .await;

    let database = match ping {
        Ok(_) => "ok".to_string(),
        Err(e) => {
            tracing::error!("Health check database ping failed: {}", e);
            "unreachable".to_string()
        }
    };

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }),
    ))
}
