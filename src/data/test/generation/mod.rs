use crate::{
    data::generation::GenerationJobRepository,
    model::generation::{
        ARENA_PIPELINE_STEPS, JOB_TYPE_ARENA, STATUS_COMPLETED, STATUS_FAILED, STATUS_QUEUED,
        STATUS_RUNNING,
    },
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mark_completed;
mod mark_failed;
mod mark_running;
mod record_step;
