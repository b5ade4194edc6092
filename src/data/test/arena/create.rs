use super::*;

/// Tests creating an arena.
///
/// Expected: Ok with the arena inactive regardless of origin
#[tokio::test]
async fn creates_inactive_arena() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_arena_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArenaRepository::new(db);
    let arena = repo
        .create(CreateArenaParams {
            name: "Shadow Keep".to_string(),
            theme: "dark fortress".to_string(),
            description: "A crumbling keep beneath a starless sky.".to_string(),
            background_url: Some("/assets/keep.png".to_string()),
            video_url: None,
            voice_intro_url: None,
            music_url: Some("/static/music/shadow-depths.mp3".to_string()),
            special_rules: Some(serde_json::json!({"fog": true})),
            difficulty: 4,
        })
        .await?;

    assert_eq!(arena.name, "Shadow Keep");
    assert_eq!(arena.difficulty, 4);
    assert!(!arena.is_active);
    assert_eq!(
        arena.special_rules,
        Some(serde_json::json!({"fog": true}))
    );

    Ok(())
}
