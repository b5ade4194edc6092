use super::*;

/// Tests the search filter against email and display name.
///
/// The needle is matched case-insensitively as a substring of either
/// column.
///
/// Expected: Ok with only the matching players
#[tokio::test]
async fn search_matches_email_and_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_email = factory::player::PlayerFactory::new(db)
        .email("shark@example.com")
        .display_name("Quiet One")
        .build()
        .await?;
    let by_name = factory::player::PlayerFactory::new(db)
        .email("other@example.com")
        .display_name("CardShark")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .email("third@example.com")
        .display_name("Bystander")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let (players, total) = repo
        .get_paginated(
            &PlayerQuery {
                q: Some("SHARK".to_string()),
                banned: None,
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert!(ids.contains(&by_email.id));
    assert!(ids.contains(&by_name.id));

    Ok(())
}

/// Tests the banned filter in both directions.
///
/// Expected: Ok with only banned or only unbanned players respectively
#[tokio::test]
async fn banned_filter_restricts_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banned = factory::create_banned_player(db, "griefing").await?;
    let clean = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);

    let (only_banned, total) = repo
        .get_paginated(
            &PlayerQuery {
                q: None,
                banned: Some(true),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(only_banned[0].id, banned.id);

    let (only_clean, total) = repo
        .get_paginated(
            &PlayerQuery {
                q: None,
                banned: Some(false),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(only_clean[0].id, clean.id);

    Ok(())
}

/// Tests an unfiltered listing with pagination.
///
/// Expected: Ok with per_page rows and the full count as total
#[tokio::test]
async fn paginates_all_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::create_player(db).await?;
    }

    let repo = PlayerRepository::new(db);
    let (page, total) = repo
        .get_paginated(&PlayerQuery { q: None, banned: None }, 0, 3)
        .await?;

    assert_eq!(total, 4);
    assert_eq!(page.len(), 3);

    Ok(())
}
