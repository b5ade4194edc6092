use crate::{data::cms::article::NewsArticleRepository, model::cms::CreateArticleParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_slug;
mod get_paginated;
mod increment_view_count;
mod set_published;
