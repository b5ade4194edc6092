use crate::{data::audit::AuditRepository, model::audit::AuditEntryParams};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod insert;
