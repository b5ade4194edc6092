//! Generation job repository.
//!
//! Bookkeeping for background asset-generation runs. The pipeline worker
//! writes one step update per completed step so progress is visible from the
//! jobs endpoint while the run is in flight.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use serde_json::Value;

use crate::model::generation::{STATUS_COMPLETED, STATUS_FAILED, STATUS_QUEUED, STATUS_RUNNING};

pub struct GenerationJobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenerationJobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a queued job row.
    ///
    /// # Arguments
    /// - `job_type` - Pipeline kind, currently `arena`
    /// - `total_steps` - Step count for progress reporting
    /// - `params` - Request parameters the worker reads back
    ///
    /// # Returns
    /// - `Ok(Model)` - The queued job
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        job_type: &str,
        total_steps: i32,
        params: Value,
    ) -> Result<entity::generation_job::Model, DbErr> {
        entity::generation_job::ActiveModel {
            id: ActiveValue::NotSet,
            job_type: ActiveValue::Set(job_type.to_string()),
            status: ActiveValue::Set(STATUS_QUEUED.to_string()),
            current_step: ActiveValue::Set(0),
            total_steps: ActiveValue::Set(total_steps),
            arena_id: ActiveValue::Set(None),
            card_template_id: ActiveValue::Set(None),
            params: ActiveValue::Set(params),
            result: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            started_at: ActiveValue::Set(None),
            finished_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::generation_job::Model>, DbErr> {
        entity::prelude::GenerationJob::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets jobs with pagination, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::generation_job::Model>, u64), DbErr> {
        let paginator = entity::prelude::GenerationJob::find()
            .order_by_desc(entity::generation_job::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let jobs = paginator.fetch_page(page).await?;

        Ok((jobs, total))
    }

    /// Marks a job running and stamps `started_at`.
    pub async fn mark_running(&self, id: i32) -> Result<(), DbErr> {
        let Some(job) = self.find_by_id(id).await? else {
            return Ok(());
        };

        let mut model: entity::generation_job::ActiveModel = job.into();
        model.status = ActiveValue::Set(STATUS_RUNNING.to_string());
        model.started_at = ActiveValue::Set(Some(Utc::now()));
        model.update(self.db).await?;

        Ok(())
    }

    /// Records a completed step and the artifacts accumulated so far.
    ///
    /// The partial result is written on every step so a later failure keeps
    /// the artifacts from the steps that did finish.
    ///
    /// # Arguments
    /// - `id` - Job id
    /// - `step` - Step number just completed, 1-based
    /// - `result` - Accumulated artifact document
    ///
    /// # Returns
    /// - `Ok(())` - Progress written (no-op if the job vanished)
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_step(&self, id: i32, step: i32, result: Value) -> Result<(), DbErr> {
        let Some(job) = self.find_by_id(id).await? else {
            return Ok(());
        };

        let mut model: entity::generation_job::ActiveModel = job.into();
        model.current_step = ActiveValue::Set(step);
        model.result = ActiveValue::Set(Some(result));
        model.update(self.db).await?;

        Ok(())
    }

    /// Marks a job completed and links the arena it produced.
    pub async fn mark_completed(&self, id: i32, arena_id: i32, result: Value) -> Result<(), DbErr> {
        let Some(job) = self.find_by_id(id).await? else {
            return Ok(());
        };

        let total_steps = job.total_steps;

        let mut model: entity::generation_job::ActiveModel = job.into();
        model.status = ActiveValue::Set(STATUS_COMPLETED.to_string());
        model.current_step = ActiveValue::Set(total_steps);
        model.arena_id = ActiveValue::Set(Some(arena_id));
        model.result = ActiveValue::Set(Some(result));
        model.finished_at = ActiveValue::Set(Some(Utc::now()));
        model.update(self.db).await?;

        Ok(())
    }

    /// Marks a job failed, recording the step it died on and the error text.
    ///
    /// Artifacts already written to `result` are left in place.
    pub async fn mark_failed(&self, id: i32, step: i32, error: &str) -> Result<(), DbErr> {
        let Some(job) = self.find_by_id(id).await? else {
            return Ok(());
        };

        let mut model: entity::generation_job::ActiveModel = job.into();
        model.status = ActiveValue::Set(STATUS_FAILED.to_string());
        model.current_step = ActiveValue::Set(step);
        model.error = ActiveValue::Set(Some(error.to_string()));
        model.finished_at = ActiveValue::Set(Some(Utc::now()));
        model.update(self.db).await?;

        Ok(())
    }
}
