use super::*;

/// Tests flipping an arena's active flag on and off.
///
/// Expected: Ok with the flag following each update
#[tokio::test]
async fn toggles_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let arena = factory::create_arena(db).await?;
    assert!(!arena.is_active);

    let repo = ArenaRepository::new(db);

    repo.set_active(arena.id, true).await?;
    assert!(repo.find_by_id(arena.id).await?.unwrap().is_active);

    repo.set_active(arena.id, false).await?;
    assert!(!repo.find_by_id(arena.id).await?.unwrap().is_active);

    Ok(())
}
