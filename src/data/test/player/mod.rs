use crate::{
    data::player::PlayerRepository,
    model::player::{BanPlayerParams, PlayerQuery, WarnPlayerParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_action;
mod add_warning;
mod get_paginated;
mod set_banned;
