use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CardTemplateDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub flavor_text: Option<String>,
    pub rarity: String,
    pub category: String,
    pub mana_cost: i32,
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub artwork_url: Option<String>,
    pub video_url: Option<String>,
    pub has_animation: bool,
    pub is_published: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<entity::card_template::Model> for CardTemplateDto {
    fn from(entity: entity::card_template::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            flavor_text: entity.flavor_text,
            rarity: entity.rarity,
            category: entity.category,
            mana_cost: entity.mana_cost,
            attack: entity.attack,
            defense: entity.defense,
            health: entity.health,
            artwork_url: entity.artwork_url,
            video_url: entity.video_url,
            has_animation: entity.has_animation,
            is_published: entity.is_published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCardTemplateDto {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub flavor_text: Option<String>,
    pub rarity: String,
    pub category: String,
    pub mana_cost: i32,
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub artwork_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub has_animation: bool,
}

/// Update payload. The slug is fixed at creation because printed cards and
/// public catalog URLs reference it.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateCardTemplateDto {
    pub name: String,
    pub description: String,
    pub flavor_text: Option<String>,
    pub rarity: String,
    pub category: String,
    pub mana_cost: i32,
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub artwork_url: Option<String>,
    pub video_url: Option<String>,
    pub has_animation: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedCardTemplatesDto {
    pub cards: Vec<CardTemplateDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NfcInstanceDto {
    pub id: i32,
    pub template_id: i32,
    pub nfc_uid: String,
    pub serial_number: i32,
    pub status: String,
    pub owner_player_id: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<entity::nfc_card_instance::Model> for NfcInstanceDto {
    fn from(entity: entity::nfc_card_instance::Model) -> Self {
        Self {
            id: entity.id,
            template_id: entity.template_id,
            nfc_uid: entity.nfc_uid,
            serial_number: entity.serial_number,
            status: entity.status,
            owner_player_id: entity.owner_player_id,
            activated_at: entity.activated_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedNfcInstancesDto {
    pub instances: Vec<NfcInstanceDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProvisionInstancesDto {
    pub count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ActivateInstanceDto {
    pub nfc_uid: String,
    pub player_id: i32,
}
