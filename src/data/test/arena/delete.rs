use super::*;

/// Tests deleting an arena.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_arena() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let arena = factory::create_arena(db).await?;

    let repo = ArenaRepository::new(db);
    let deleted = repo.delete(arena.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(arena.id).await?.is_none());

    Ok(())
}

/// Tests deleting an arena that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_arena_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArenaRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
