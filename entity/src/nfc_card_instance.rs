use sea_orm::entity::prelude::*;

/// One physical, uniquely identified card minted from a template.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "nfc_card_instance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_id: i32,
    #[sea_orm(unique)]
    pub nfc_uid: String,
    pub serial_number: i32,
    /// One of `provisioned`, `activated`, `revoked`.
    pub status: String,
    pub owner_player_id: Option<i32>,
    pub activated_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card_template::Entity",
        from = "Column::TemplateId",
        to = "super::card_template::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CardTemplate,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::OwnerPlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Player,
}

impl Related<super::card_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardTemplate.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
