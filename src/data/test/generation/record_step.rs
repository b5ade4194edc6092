use super::*;

/// Tests recording per-step progress.
///
/// Each write replaces the accumulated artifact document, so the latest
/// write must carry everything produced so far.
///
/// Expected: Ok with current_step and the artifacts updated each time
#[tokio::test]
async fn accumulates_artifacts_across_steps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let job = factory::create_job(db).await?;

    let repo = GenerationJobRepository::new(db);

    repo.record_step(job.id, 1, json!({"brief": {"mood": "dark"}}))
        .await?;
    let after_first = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(after_first.current_step, 1);

    repo.record_step(
        job.id,
        2,
        json!({"brief": {"mood": "dark"}, "lore": {"title": "Shadow Keep"}}),
    )
    .await?;
    let after_second = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(after_second.current_step, 2);

    let result = after_second.result.unwrap();
    assert_eq!(result["brief"]["mood"], "dark");
    assert_eq!(result["lore"]["title"], "Shadow Keep");

    Ok(())
}
