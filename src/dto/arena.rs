use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArenaDto {
    pub id: i32,
    pub name: String,
    pub theme: String,
    pub description: String,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub special_rules: Option<Value>,
    pub difficulty: i32,
    pub is_active: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<entity::arena::Model> for ArenaDto {
    fn from(entity: entity::arena::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            theme: entity.theme,
            description: entity.description,
            background_url: entity.background_url,
            video_url: entity.video_url,
            voice_intro_url: entity.voice_intro_url,
            music_url: entity.music_url,
            special_rules: entity.special_rules,
            difficulty: entity.difficulty,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateArenaDto {
    pub name: String,
    pub theme: String,
    pub description: String,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub special_rules: Option<Value>,
    pub difficulty: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateArenaDto {
    pub name: String,
    pub theme: String,
    pub description: String,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub special_rules: Option<Value>,
    pub difficulty: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedArenasDto {
    pub arenas: Vec<ArenaDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
