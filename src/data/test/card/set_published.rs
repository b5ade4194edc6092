use super::*;

/// Tests publishing and unpublishing a template.
///
/// Expected: Ok with the flag following each update
#[tokio::test]
async fn toggles_published_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_template(db).await?;

    let repo = CardTemplateRepository::new(db);

    repo.set_published(card.id, true).await?;
    assert!(repo.find_by_id(card.id).await?.unwrap().is_published);

    repo.set_published(card.id, false).await?;
    assert!(!repo.find_by_id(card.id).await?.unwrap().is_published);

    Ok(())
}
