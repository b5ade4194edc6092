use super::*;

/// Tests banning a player with an expiry.
///
/// Expected: Ok with is_banned, reason, and expiry written
#[tokio::test]
async fn sets_ban_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let player = factory::create_player(db).await?;
    let expires = Utc::now() + Duration::days(7);

    let repo = PlayerRepository::new(db);
    repo.set_banned(&BanPlayerParams {
        player_id: player.id,
        admin_id: admin.id,
        reason: "cheating".to_string(),
        expires_at: Some(expires),
    })
    .await?;

    let banned = repo.find_by_id(player.id).await?.unwrap();
    assert!(banned.is_banned);
    assert_eq!(banned.ban_reason.as_deref(), Some("cheating"));
    assert!(banned.ban_expires_at.is_some());

    Ok(())
}

/// Tests unbanning a previously banned player.
///
/// Expected: Ok with every ban column cleared
#[tokio::test]
async fn clear_banned_resets_all_ban_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_banned_player(db, "griefing").await?;

    let repo = PlayerRepository::new(db);
    repo.clear_banned(player.id).await?;

    let cleared = repo.find_by_id(player.id).await?.unwrap();
    assert!(!cleared.is_banned);
    assert!(cleared.ban_reason.is_none());
    assert!(cleared.ban_expires_at.is_none());

    Ok(())
}

/// Tests that banning leaves the warning counter alone.
///
/// Expected: warning_count unchanged by the ban
#[tokio::test]
async fn ban_does_not_touch_warning_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let player = factory::player::PlayerFactory::new(db)
        .warning_count(2)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    repo.set_banned(&BanPlayerParams {
        player_id: player.id,
        admin_id: admin.id,
        reason: "cheating".to_string(),
        expires_at: None,
    })
    .await?;

    assert_eq!(repo.find_by_id(player.id).await?.unwrap().warning_count, 2);

    Ok(())
}
