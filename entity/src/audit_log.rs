use sea_orm::entity::prelude::*;

/// Trail of mutating admin operations. `admin_id` is nullable because some
/// entries (webhook processing, startup tasks) have no acting admin.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub admin_id: Option<i32>,
    /// Dotted action name, e.g. `player.ban`, `card.publish`.
    pub action: String,
    /// Resource area the action touched, e.g. `player`, `card_template`.
    pub resource: String,
    pub resource_id: Option<i32>,
    pub detail: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::AdminId",
        to = "super::admin::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Admin,
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
