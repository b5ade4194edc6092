use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rbac::Role;

/// Admin account as exposed over the API. Never carries the password hash.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<entity::admin::Model> for AdminDto {
    fn from(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            // Unknown strings cannot appear here; the column is only ever
            // written through rbac::Role::as_str
            role: Role::from_str(&entity.role).unwrap_or(Role::Viewer),
            is_active: entity.is_active,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAdminDto {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateAdminRoleDto {
    pub role: Role,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResetPasswordDto {
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAdminsDto {
    pub admins: Vec<AdminDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
