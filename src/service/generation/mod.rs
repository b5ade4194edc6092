//! Background arena generation.
//!
//! Accepting a generation request is cheap: validate, write a queued job
//! row, spawn one tokio task running the pipeline, answer 202 with the job
//! id. Progress is read back from the job row, which the pipeline updates
//! once per completed step.

pub mod clients;
pub mod pipeline;

use serde_json::json;

use crate::{
    data::generation::GenerationJobRepository,
    dto::generation::{
        GenerateArenaDto, GenerationAcceptedDto, GenerationJobDto, PaginatedGenerationJobsDto,
    },
    error::AppError,
    model::{
        audit::AuditEntryParams,
        generation::{GenerationRequest, ARENA_PIPELINE_STEPS, JOB_TYPE_ARENA},
    },
    service::audit::AuditService,
    state::AppState,
};

pub struct GenerationService<'a> {
    state: &'a AppState,
}

impl<'a> GenerationService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Accepts an arena generation request and starts the pipeline.
    ///
    /// # Returns
    /// - `Ok(GenerationAcceptedDto)` - Job queued, worker spawned
    /// - `Err(AppError::BadRequest)` - Empty name/theme or difficulty out of range
    pub async fn start_arena(
        &self,
        acting_admin_id: i32,
        dto: GenerateArenaDto,
    ) -> Result<GenerationAcceptedDto, AppError> {
        if dto.name.trim().is_empty() || dto.theme.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Arena name and theme must not be empty".to_string(),
            ));
        }
        if !(1..=5).contains(&dto.difficulty) {
            return Err(AppError::BadRequest(
                "Arena difficulty must be between 1 and 5".to_string(),
            ));
        }

        let request = GenerationRequest {
            name: dto.name.trim().to_string(),
            theme: dto.theme.trim().to_string(),
            difficulty: dto.difficulty,
        };

        let job = GenerationJobRepository::new(&self.state.db)
            .create(JOB_TYPE_ARENA, ARENA_PIPELINE_STEPS, json!(request))
            .await?;

        AuditService::new(&self.state.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "arena.generate", "generation_job")
                    .resource_id(job.id)
                    .detail(json!({ "name": request.name, "theme": request.theme })),
            )
            .await;

        let state = self.state.clone();
        let job_id = job.id;
        tokio::spawn(async move {
            pipeline::run(state, job_id, request).await;
        });

        Ok(GenerationAcceptedDto {
            job_id: job.id,
            status: job.status,
            total_steps: job.total_steps,
        })
    }

    /// Gets one job's status and artifacts.
    pub async fn get_job(&self, id: i32) -> Result<GenerationJobDto, AppError> {
        let Some(job) = GenerationJobRepository::new(&self.state.db)
            .find_by_id(id)
            .await?
        else {
            return Err(AppError::NotFound(format!("Generation job {} not found", id)));
        };

        Ok(GenerationJobDto::from(job))
    }

    /// Gets jobs with pagination, newest first.
    pub async fn get_jobs(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedGenerationJobsDto, AppError> {
        let (jobs, total) = GenerationJobRepository::new(&self.state.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedGenerationJobsDto {
            jobs: jobs.into_iter().map(GenerationJobDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }
}
