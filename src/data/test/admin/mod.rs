use crate::{data::admin::AdminRepository, model::admin::CreateAdminParams, rbac::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_exists;
mod create;
mod find_by_email;
mod get_all_paginated;
mod set_active;
mod set_role;
