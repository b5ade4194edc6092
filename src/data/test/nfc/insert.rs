use super::*;

/// Tests inserting a provisioned instance.
///
/// Expected: Ok with the instance unowned and in the provisioned state
#[tokio::test]
async fn inserts_provisioned_instance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let template = factory::create_template(db).await?;

    let repo = NfcInstanceRepository::new(db);
    let instance = repo.insert(template.id, "DKP-00000000000001", 1).await?;

    assert_eq!(instance.template_id, template.id);
    assert_eq!(instance.nfc_uid, "DKP-00000000000001");
    assert_eq!(instance.serial_number, 1);
    assert_eq!(instance.status, INSTANCE_STATUS_PROVISIONED);
    assert!(instance.owner_player_id.is_none());
    assert!(instance.activated_at.is_none());

    Ok(())
}

/// Tests inserting a second instance with the same UID.
///
/// The unique column is the backstop for UID generator collisions.
///
/// Expected: Err from the unique nfc_uid column
#[tokio::test]
async fn rejects_duplicate_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let template = factory::create_template(db).await?;

    let repo = NfcInstanceRepository::new(db);
    repo.insert(template.id, "DKP-00000000000001", 1).await?;
    let result = repo.insert(template.id, "DKP-00000000000001", 2).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests finding an instance by its NFC UID.
///
/// Expected: Ok(Some) for the stored UID, Ok(None) otherwise
#[tokio::test]
async fn finds_instance_by_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, instance) = factory::helpers::create_instance_with_template(db).await?;

    let repo = NfcInstanceRepository::new(db);

    let found = repo.find_by_uid(&instance.nfc_uid).await?;
    assert_eq!(found.map(|i| i.id), Some(instance.id));

    let missing = repo.find_by_uid("DKP-FFFFFFFFFFFFFF").await?;
    assert!(missing.is_none());

    Ok(())
}
