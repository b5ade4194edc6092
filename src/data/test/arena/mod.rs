use crate::{
    data::arena::ArenaRepository,
    model::arena::{CreateArenaParams, UpdateArenaParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod set_active;
mod update;
