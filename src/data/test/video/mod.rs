use crate::{data::cms::video::VideoItemRepository, model::cms::CreateVideoParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod increment_view_count;
