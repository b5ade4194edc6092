use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub display_name: String,
    pub elo_rating: i32,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub ban_expires_at: Option<DateTimeUtc>,
    pub warning_count: i32,
    pub created_at: DateTimeUtc,
    pub last_seen_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_warning::Entity")]
    PlayerWarning,
    #[sea_orm(has_many = "super::moderation_action::Entity")]
    ModerationAction,
    #[sea_orm(has_many = "super::nfc_card_instance::Entity")]
    NfcCardInstance,
    #[sea_orm(has_many = "super::shop_order::Entity")]
    ShopOrder,
}

impl Related<super::player_warning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerWarning.def()
    }
}

impl Related<super::moderation_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModerationAction.def()
    }
}

impl Related<super::nfc_card_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NfcCardInstance.def()
    }
}

impl Related<super::shop_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
