use super::*;

/// Tests creating a queued generation job.
///
/// Expected: Ok with the job queued at step zero and the request stored
#[tokio::test]
async fn creates_queued_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenerationJobRepository::new(db);
    let job = repo
        .create(
            JOB_TYPE_ARENA,
            ARENA_PIPELINE_STEPS,
            json!({"name": "Shadow Keep", "theme": "dark", "difficulty": 3}),
        )
        .await?;

    assert_eq!(job.job_type, JOB_TYPE_ARENA);
    assert_eq!(job.status, STATUS_QUEUED);
    assert_eq!(job.current_step, 0);
    assert_eq!(job.total_steps, ARENA_PIPELINE_STEPS);
    assert_eq!(job.params["name"], "Shadow Keep");
    assert!(job.arena_id.is_none());
    assert!(job.result.is_none());
    assert!(job.started_at.is_none());

    Ok(())
}
