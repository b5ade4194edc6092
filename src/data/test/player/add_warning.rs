use super::*;

/// Tests recording a warning.
///
/// The warning row and the counter bump happen together, so the count on
/// the player must match the number of rows in the log.
///
/// Expected: Ok with the row inserted and warning_count incremented
#[tokio::test]
async fn inserts_row_and_increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let warning = repo
        .add_warning(&WarnPlayerParams {
            player_id: player.id,
            admin_id: admin.id,
            reason: "abusive chat".to_string(),
        })
        .await?;

    assert_eq!(warning.player_id, player.id);
    assert_eq!(warning.admin_id, admin.id);
    assert_eq!(warning.reason, "abusive chat");

    let updated = repo.find_by_id(player.id).await?.unwrap();
    assert_eq!(updated.warning_count, 1);

    Ok(())
}

/// Tests repeated warnings against the same player.
///
/// Expected: counter climbs with each warning and the log keeps every row
#[tokio::test]
async fn repeated_warnings_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    for i in 0..3 {
        repo.add_warning(&WarnPlayerParams {
            player_id: player.id,
            admin_id: admin.id,
            reason: format!("strike {}", i + 1),
        })
        .await?;
    }

    assert_eq!(repo.find_by_id(player.id).await?.unwrap().warning_count, 3);
    assert_eq!(repo.get_warnings(player.id).await?.len(), 3);

    Ok(())
}
