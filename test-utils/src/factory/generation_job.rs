//! Generation job factory for creating test generation job entities.
//!
//! This module provides factory methods for creating generation jobs with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test generation jobs with customizable fields.
///
/// Provides a builder pattern for creating job entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::generation_job::GenerationJobFactory;
///
/// let job = GenerationJobFactory::new(&db)
///     .status("running")
///     .arena_id(Some(arena.id))
///     .build()
///     .await?;
/// ```
pub struct GenerationJobFactory<'a> {
    db: &'a DatabaseConnection,
    job_type: String,
    status: String,
    current_step: i32,
    total_steps: i32,
    arena_id: Option<i32>,
    params: serde_json::Value,
}

impl<'a> GenerationJobFactory<'a> {
    /// Creates a new GenerationJobFactory with default values.
    ///
    /// Defaults:
    /// - job_type: `"arena"`
    /// - status: `"queued"`
    /// - current_step: `0`, total_steps: `8`
    /// - params: `{"theme": "ancient ruins"}`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GenerationJobFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            job_type: "arena".to_string(),
            status: "queued".to_string(),
            current_step: 0,
            total_steps: 8,
            arena_id: None,
            params: json!({"theme": "ancient ruins"}),
        }
    }

    /// Sets the job type.
    ///
    /// # Arguments
    /// - `job_type` - One of `arena`, `card_art`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    /// Sets the job status.
    ///
    /// # Arguments
    /// - `status` - One of `queued`, `running`, `completed`, `failed`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the current step for the job.
    ///
    /// # Arguments
    /// - `current_step` - Zero-based step the job has reached
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn current_step(mut self, current_step: i32) -> Self {
        self.current_step = current_step;
        self
    }

    /// Sets the arena produced by the job.
    ///
    /// # Arguments
    /// - `arena_id` - Arena ID, or `None` if not yet persisted
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn arena_id(mut self, arena_id: Option<i32>) -> Self {
        self.arena_id = arena_id;
        self
    }

    /// Sets the request parameters for the job.
    ///
    /// # Arguments
    /// - `params` - JSON parameters the job was started with
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn params(mut self, params: serde_json::Value) -> Self {
        self.params = params;
        self
    }

    /// Builds and inserts the generation job entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::generation_job::Model)` - Created job entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::generation_job::Model, DbErr> {
        entity::generation_job::ActiveModel {
            id: ActiveValue::NotSet,
            job_type: ActiveValue::Set(self.job_type),
            status: ActiveValue::Set(self.status),
            current_step: ActiveValue::Set(self.current_step),
            total_steps: ActiveValue::Set(self.total_steps),
            arena_id: ActiveValue::Set(self.arena_id),
            card_template_id: ActiveValue::Set(None),
            params: ActiveValue::Set(self.params),
            result: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            started_at: ActiveValue::Set(None),
            finished_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a generation job with default values.
///
/// Shorthand for `GenerationJobFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::generation_job::Model)` - Created job entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let job = create_job(&db).await?;
/// ```
pub async fn create_job(db: &DatabaseConnection) -> Result<entity::generation_job::Model, DbErr> {
    GenerationJobFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_job_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_arena_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let job = create_job(db).await?;

        assert_eq!(job.job_type, "arena");
        assert_eq!(job.status, "queued");
        assert_eq!(job.current_step, 0);
        assert_eq!(job.total_steps, 8);
        assert!(job.arena_id.is_none());
        assert!(job.started_at.is_none());

        Ok(())
    }
}
