use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuditEntryDto {
    pub id: i32,
    /// None when the acting admin has since been deleted.
    pub admin_id: Option<i32>,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub detail: Option<Value>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<entity::audit_log::Model> for AuditEntryDto {
    fn from(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            admin_id: entity.admin_id,
            action: entity.action,
            resource: entity.resource,
            resource_id: entity.resource_id,
            detail: entity.detail,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAuditEntriesDto {
    pub entries: Vec<AuditEntryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
