use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::admin::AdminDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// One-time first-admin creation request. The setup code comes from the
/// server log of a fresh deployment.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BootstrapDto {
    pub setup_code: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TokenResponseDto {
    pub token: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
    pub admin: AdminDto,
}
