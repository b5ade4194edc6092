use sea_orm::entity::prelude::*;

/// Base design of a trading card, prior to any physical NFC instantiation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "card_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub flavor_text: Option<String>,
    /// One of `common`, `rare`, `epic`, `legendary`.
    pub rarity: String,
    /// One of `creature`, `structure`, `action`, `equipment`, `special`.
    pub category: String,
    pub mana_cost: i32,
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub artwork_url: Option<String>,
    pub video_url: Option<String>,
    pub has_animation: bool,
    pub is_published: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nfc_card_instance::Entity")]
    NfcCardInstance,
}

impl Related<super::nfc_card_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NfcCardInstance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
