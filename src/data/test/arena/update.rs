use super::*;

/// Tests updating an arena's fields.
///
/// Expected: Ok(Some) with the new values and the active flag untouched
#[tokio::test]
async fn updates_fields_without_touching_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let arena = factory::arena::ArenaFactory::new(db).active(true).build().await?;

    let repo = ArenaRepository::new(db);
    let updated = repo
        .update(UpdateArenaParams {
            id: arena.id,
            name: "Renamed".to_string(),
            theme: "serene garden".to_string(),
            description: "Calmer now.".to_string(),
            background_url: None,
            video_url: None,
            voice_intro_url: None,
            music_url: None,
            special_rules: None,
            difficulty: 1,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.difficulty, 1);
    assert!(updated.is_active);

    Ok(())
}

/// Tests updating an arena that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_arena_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArenaRepository::new(db);
    let result = repo
        .update(UpdateArenaParams {
            id: 999,
            name: "Ghost".to_string(),
            theme: "void".to_string(),
            description: String::new(),
            background_url: None,
            video_url: None,
            voice_intro_url: None,
            music_url: None,
            special_rules: None,
            difficulty: 1,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
