use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{error::AppError, service::audit::AuditService, state::AppState};

/// Tag for grouping audit endpoints in OpenAPI documentation
pub static AUDIT_TAG: &str = "audit";

#[derive(Deserialize)]
pub struct AuditListParams {
    /// Restrict to one acting admin.
    pub admin_id: Option<i32>,
    /// Restrict to one resource kind, such as `player` or `card_template`.
    pub resource: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    50
}

/// GET /v1/admin/audit - The audit trail, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AuditListParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = AuditService::new(&state.db)
        .get_paginated(
            params.admin_id,
            params.resource.as_deref(),
            params.page,
            params.per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}
