use crate::{
    data::card::CardTemplateRepository,
    model::card::{CardQuery, CreateCardTemplateParams, UpdateCardTemplateParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod set_published;
mod update;

fn empty_query() -> CardQuery {
    CardQuery {
        rarity: None,
        category: None,
        q: None,
        published_only: false,
    }
}
