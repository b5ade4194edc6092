use super::*;

/// Tests deleting a template.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_template() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_template(db).await?;

    let repo = CardTemplateRepository::new(db);
    let deleted = repo.delete(card.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(card.id).await?.is_none());

    Ok(())
}

/// Tests deleting a template that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_template_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardTemplateRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
