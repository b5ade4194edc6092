use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    pub password_hash: String,
    /// Role name, one of the five values understood by `rbac::Role`.
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_warning::Entity")]
    PlayerWarning,
    #[sea_orm(has_many = "super::moderation_action::Entity")]
    ModerationAction,
    #[sea_orm(has_many = "super::news_article::Entity")]
    NewsArticle,
    #[sea_orm(has_many = "super::announcement::Entity")]
    Announcement,
    #[sea_orm(has_many = "super::audit_log::Entity")]
    AuditLog,
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

impl Related<super::news_article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsArticle.def()
    }
}

impl Related<super::announcement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Announcement.def()
    }
}

impl Related<super::audit_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
