use super::*;

/// Tests completing a job.
///
/// Expected: Ok with the arena linked, current_step at the total, and
/// finished_at stamped
#[tokio::test]
async fn links_arena_and_finishes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let arena = factory::create_arena(db).await?;
    let job = factory::create_job(db).await?;

    let repo = GenerationJobRepository::new(db);
    repo.mark_completed(job.id, arena.id, json!({"manifest": {"name": "Done"}}))
        .await?;

    let completed = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(completed.status, STATUS_COMPLETED);
    assert_eq!(completed.current_step, completed.total_steps);
    assert_eq!(completed.arena_id, Some(arena.id));
    assert!(completed.finished_at.is_some());
    assert!(completed.error.is_none());

    Ok(())
}
