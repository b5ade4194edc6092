use super::*;

/// Tests revoking an activated instance.
///
/// Ownership stays on the row after revocation so the history of who held
/// the card is not lost.
///
/// Expected: Ok with status revoked and the owner retained
#[tokio::test]
async fn revokes_but_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let template = factory::create_template(db).await?;
    let instance = factory::nfc_card_instance::NfcCardInstanceFactory::new(db, template.id)
        .status(INSTANCE_STATUS_ACTIVATED)
        .owner_player_id(Some(player.id))
        .build()
        .await?;

    let repo = NfcInstanceRepository::new(db);
    repo.revoke(instance.id).await?;

    let revoked = repo.find_by_id(instance.id).await?.unwrap();
    assert_eq!(revoked.status, INSTANCE_STATUS_REVOKED);
    assert_eq!(revoked.owner_player_id, Some(player.id));

    Ok(())
}
