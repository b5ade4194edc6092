use super::*;

/// Tests activating a provisioned instance onto a player.
///
/// Expected: Ok with status, owner, and activation time written
#[tokio::test]
async fn activates_onto_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let (_, instance) = factory::helpers::create_instance_with_template(db).await?;

    let repo = NfcInstanceRepository::new(db);
    let activated = repo.activate(instance.id, player.id).await?;

    assert_eq!(activated.status, INSTANCE_STATUS_ACTIVATED);
    assert_eq!(activated.owner_player_id, Some(player.id));
    assert!(activated.activated_at.is_some());

    Ok(())
}

/// Tests activating an instance that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn missing_instance_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = NfcInstanceRepository::new(db);
    let result = repo.activate(999, player.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
