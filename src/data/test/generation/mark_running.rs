use super::*;

/// Tests moving a queued job to running.
///
/// Expected: Ok with the status running and started_at stamped
#[tokio::test]
async fn stamps_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let job = factory::create_job(db).await?;

    let repo = GenerationJobRepository::new(db);
    repo.mark_running(job.id).await?;

    let running = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(running.status, STATUS_RUNNING);
    assert!(running.started_at.is_some());
    assert!(running.finished_at.is_none());

    Ok(())
}

/// Tests marking a job running when the row no longer exists.
///
/// Expected: Ok, silently ignored
#[tokio::test]
async fn missing_job_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenerationJobRepository::new(db);
    repo.mark_running(999).await?;

    Ok(())
}
