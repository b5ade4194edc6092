use crate::{
    data::cms::announcement::AnnouncementRepository,
    model::cms::{CreateAnnouncementParams, UpdateAnnouncementParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_live;
mod update;
