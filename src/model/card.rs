use crate::dto::card::{CreateCardTemplateDto, UpdateCardTemplateDto};

/// Filter criteria shared by the public catalog and the admin card list.
#[derive(Debug, Clone, Default)]
pub struct CardQuery {
    pub rarity: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match against the card name.
    pub q: Option<String>,
    /// The public catalog sets this; the admin list sees drafts too.
    pub published_only: bool,
}

#[derive(Debug, Clone)]
pub struct CreateCardTemplateParams {
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
}

impl CreateCardTemplateParams {
    /// Converts the request DTO to repository parameters.
    pub fn from_dto(dto: CreateCardTemplateDto) -> Self {
        Self {
            slug: dto.slug,
            name: dto.name,
            description: dto.description,
            flavor_text: dto.flavor_text,
            rarity: dto.rarity,
            category: dto.category,
            mana_cost: dto.mana_cost,
            attack: dto.attack,
            defense: dto.defense,
            health: dto.health,
            artwork_url: dto.artwork_url,
            video_url: dto.video_url,
            has_animation: dto.has_animation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCardTemplateParams {
    pub id: i32,
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

impl UpdateCardTemplateParams {
    /// Converts the request DTO to repository parameters.
    pub fn from_dto(id: i32, dto: UpdateCardTemplateDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            flavor_text: dto.flavor_text,
            rarity: dto.rarity,
            category: dto.category,
            mana_cost: dto.mana_cost,
            attack: dto.attack,
            defense: dto.defense,
            health: dto.health,
            artwork_url: dto.artwork_url,
            video_url: dto.video_url,
            has_animation: dto.has_animation,
        }
    }
}
