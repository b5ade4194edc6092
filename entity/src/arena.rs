use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "arena")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub theme: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
    pub special_rules: Option<Json>,
    pub difficulty: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::generation_job::Entity")]
    GenerationJob,
}

impl Related<super::generation_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenerationJob.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
