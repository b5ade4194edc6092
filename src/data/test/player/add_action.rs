use super::*;

/// Tests appending to the moderation action log.
///
/// Expected: Ok with the action row holding all given fields
#[tokio::test]
async fn appends_action_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let action = repo
        .add_action(player.id, admin.id, "ban", "cheating", None)
        .await?;

    assert_eq!(action.player_id, player.id);
    assert_eq!(action.admin_id, admin.id);
    assert_eq!(action.action, "ban");
    assert_eq!(action.reason, "cheating");
    assert!(action.expires_at.is_none());

    Ok(())
}

/// Tests that the action log is scoped per player.
///
/// Expected: get_actions only returns the target player's history
#[tokio::test]
async fn actions_are_scoped_to_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    repo.add_action(first.id, admin.id, "warn", "spam", None)
        .await?;
    repo.add_action(first.id, admin.id, "ban", "spam again", None)
        .await?;
    repo.add_action(second.id, admin.id, "warn", "afk", None)
        .await?;

    let first_log = repo.get_actions(first.id).await?;
    assert_eq!(first_log.len(), 2);
    assert!(first_log.iter().all(|a| a.player_id == first.id));

    let second_log = repo.get_actions(second.id).await?;
    assert_eq!(second_log.len(), 1);
    assert_eq!(second_log[0].action, "warn");

    Ok(())
}
