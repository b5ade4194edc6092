use sea_orm::entity::prelude::*;

/// Progress bookkeeping for one run of the asset generation pipeline.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "generation_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of `arena`, `card_art`.
    pub job_type: String,
    /// One of `queued`, `running`, `completed`, `failed`.
    pub status: String,
    pub current_step: i32,
    pub total_steps: i32,
    pub arena_id: Option<i32>,
    pub card_template_id: Option<i32>,
    pub params: Json,
    pub result: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
    pub created_at: DateTimeUtc,
    pub started_at: Option<DateTimeUtc>,
    pub finished_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::arena::Entity",
        from = "Column::ArenaId",
        to = "super::arena::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Arena,
}

impl Related<super::arena::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Arena.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
