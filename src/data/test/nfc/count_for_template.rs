use super::*;

/// Tests the per-template instance count.
///
/// Expected: Ok with counts scoped to each template
#[tokio::test]
async fn counts_are_scoped_to_template() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_template(db).await?;
    let second = factory::create_template(db).await?;

    factory::create_instance(db, first.id).await?;
    factory::create_instance(db, first.id).await?;
    factory::create_instance(db, second.id).await?;

    let repo = NfcInstanceRepository::new(db);

    assert_eq!(repo.count_for_template(first.id).await?, 2);
    assert_eq!(repo.count_for_template(second.id).await?, 1);

    Ok(())
}

/// Tests the global count with and without a status filter.
///
/// Expected: Ok with the status filter narrowing the count
#[tokio::test]
async fn count_all_honors_status_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let template = factory::create_template(db).await?;
    factory::create_instance(db, template.id).await?;
    factory::nfc_card_instance::NfcCardInstanceFactory::new(db, template.id)
        .status(INSTANCE_STATUS_ACTIVATED)
        .build()
        .await?;

    let repo = NfcInstanceRepository::new(db);

    assert_eq!(repo.count_all(None).await?, 2);
    assert_eq!(repo.count_all(Some(INSTANCE_STATUS_ACTIVATED)).await?, 1);
    assert_eq!(repo.count_all(Some(INSTANCE_STATUS_REVOKED)).await?, 0);

    Ok(())
}
