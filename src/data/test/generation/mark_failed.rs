use super::*;

/// Tests failing a job part-way through.
///
/// Artifacts written by earlier steps stay on the row after failure so a
/// partially generated arena can be inspected.
///
/// Expected: Ok with the failing step, error text, and prior artifacts kept
#[tokio::test]
async fn records_step_and_error_keeping_artifacts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let job = factory::create_job(db).await?;

    let repo = GenerationJobRepository::new(db);
    repo.record_step(job.id, 2, json!({"brief": {"mood": "dark"}}))
        .await?;
    repo.mark_failed(job.id, 3, "background art: upstream timed out")
        .await?;

    let failed = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(failed.status, STATUS_FAILED);
    assert_eq!(failed.current_step, 3);
    assert_eq!(
        failed.error.as_deref(),
        Some("background art: upstream timed out")
    );
    assert!(failed.finished_at.is_some());
    assert_eq!(failed.result.unwrap()["brief"]["mood"], "dark");
    assert!(failed.arena_id.is_none());

    Ok(())
}
