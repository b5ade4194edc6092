use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Request to generate a complete arena through the asset pipeline.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GenerateArenaDto {
    pub name: String,
    pub theme: String,
    pub difficulty: i32,
}

/// Accepted generation request. The job runs in the background; poll the
/// jobs endpoint with the returned id for progress.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GenerationAcceptedDto {
    pub job_id: i32,
    pub status: String,
    pub total_steps: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GenerationJobDto {
    pub id: i32,
    pub job_type: String,
    pub status: String,
    pub current_step: i32,
    pub total_steps: i32,
    pub arena_id: Option<i32>,
    pub card_template_id: Option<i32>,
    #[schema(value_type = Object)]
    pub params: Value,
    #[schema(value_type = Option<Object>)]
    pub result: Option<Value>,
    pub error: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<entity::generation_job::Model> for GenerationJobDto {
    fn from(entity: entity::generation_job::Model) -> Self {
        Self {
            id: entity.id,
            job_type: entity.job_type,
            status: entity.status,
            current_step: entity.current_step,
            total_steps: entity.total_steps,
            arena_id: entity.arena_id,
            card_template_id: entity.card_template_id,
            params: entity.params,
            result: entity.result,
            error: entity.error,
            created_at: entity.created_at,
            started_at: entity.started_at,
            finished_at: entity.finished_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedGenerationJobsDto {
    pub jobs: Vec<GenerationJobDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
