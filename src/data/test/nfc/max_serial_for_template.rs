use super::*;

/// Tests the highest-serial query on an unminted template.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unminted_template_has_no_serial() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let template = factory::create_template(db).await?;

    let repo = NfcInstanceRepository::new(db);
    let max = repo.max_serial_for_template(template.id).await?;

    assert!(max.is_none());

    Ok(())
}

/// Tests that the highest serial is scoped to the template.
///
/// A second print run continues from the template's own serials, not from
/// another template's.
///
/// Expected: Ok(Some) with the per-template maximum
#[tokio::test]
async fn highest_serial_is_per_template() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_template(db).await?;
    let second = factory::create_template(db).await?;

    let repo = NfcInstanceRepository::new(db);
    repo.insert(first.id, "DKP-00000000000001", 1).await?;
    repo.insert(first.id, "DKP-00000000000002", 5).await?;
    repo.insert(second.id, "DKP-00000000000003", 40).await?;

    assert_eq!(repo.max_serial_for_template(first.id).await?, Some(5));
    assert_eq!(repo.max_serial_for_template(second.id).await?, Some(40));

    Ok(())
}
