use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub email: String,
    pub display_name: String,
    pub elo_rating: i32,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub ban_expires_at: Option<DateTime<Utc>>,
    pub warning_count: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl From<entity::player::Model> for PlayerDto {
    fn from(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            display_name: entity.display_name,
            elo_rating: entity.elo_rating,
            is_banned: entity.is_banned,
            ban_reason: entity.ban_reason,
            ban_expires_at: entity.ban_expires_at,
            warning_count: entity.warning_count,
            created_at: entity.created_at,
            last_seen_at: entity.last_seen_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerWarningDto {
    pub id: i32,
    pub player_id: i32,
    pub admin_id: i32,
    pub reason: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<entity::player_warning::Model> for PlayerWarningDto {
    fn from(entity: entity::player_warning::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            admin_id: entity.admin_id,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModerationActionDto {
    pub id: i32,
    pub player_id: i32,
    pub admin_id: i32,
    pub action: String,
    pub reason: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<entity::moderation_action::Model> for ModerationActionDto {
    fn from(entity: entity::moderation_action::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            admin_id: entity.admin_id,
            action: entity.action,
            reason: entity.reason,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }
}

/// Player profile together with the full moderation history.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDetailDto {
    pub player: PlayerDto,
    pub warnings: Vec<PlayerWarningDto>,
    pub actions: Vec<ModerationActionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct WarnPlayerDto {
    pub reason: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BanPlayerDto {
    pub reason: String,
    /// Omit for a permanent ban.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPlayersDto {
    pub players: Vec<PlayerDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
