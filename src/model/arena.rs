use serde_json::Value;

use crate::dto::arena::{CreateArenaDto, UpdateArenaDto};

#[derive(Debug, Clone)]
pub struct CreateArenaParams {
    pub name: String,
    pub theme: String,
    pub description: String,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
    pub special_rules: Option<Value>,
    pub difficulty: i32,
}

impl CreateArenaParams {
    /// Converts the request DTO to repository parameters.
    pub fn from_dto(dto: CreateArenaDto) -> Self {
        Self {
            name: dto.name,
            theme: dto.theme,
            description: dto.description,
            background_url: dto.background_url,
            video_url: dto.video_url,
            voice_intro_url: dto.voice_intro_url,
            music_url: dto.music_url,
            special_rules: dto.special_rules,
            difficulty: dto.difficulty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateArenaParams {
    pub id: i32,
    pub name: String,
    pub theme: String,
    pub description: String,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
    pub special_rules: Option<Value>,
    pub difficulty: i32,
}

impl UpdateArenaParams {
    /// Converts the request DTO to repository parameters.
    pub fn from_dto(id: i32, dto: UpdateArenaDto) -> Self {
        Self {
            id,
            name: dto.name,
            theme: dto.theme,
            description: dto.description,
            background_url: dto.background_url,
            video_url: dto.video_url,
            voice_intro_url: dto.voice_intro_url,
            music_url: dto.music_url,
            special_rules: dto.special_rules,
            difficulty: dto.difficulty,
        }
    }
}
