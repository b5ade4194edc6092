use super::*;

/// Tests updating a template's mutable fields.
///
/// The slug is deliberately absent from the update parameters; printed
/// cards reference it and it never changes after creation.
///
/// Expected: Ok(Some) with the new fields and the original slug
#[tokio::test]
async fn updates_fields_but_not_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card_template::CardTemplateFactory::new(db)
        .slug("ember-drake")
        .name("Ember Drake")
        .build()
        .await?;

    let repo = CardTemplateRepository::new(db);
    let updated = repo
        .update(UpdateCardTemplateParams {
            id: card.id,
            name: "Ember Drake, Reborn".to_string(),
            description: "Rebalanced.".to_string(),
            flavor_text: None,
            rarity: "epic".to_string(),
            category: "creature".to_string(),
            mana_cost: 4,
            attack: 5,
            defense: 4,
            health: 6,
            artwork_url: None,
            video_url: None,
            has_animation: true,
        })
        .await?
        .unwrap();

    assert_eq!(updated.slug, "ember-drake");
    assert_eq!(updated.name, "Ember Drake, Reborn");
    assert_eq!(updated.mana_cost, 4);
    assert!(updated.has_animation);
    assert!(updated.updated_at >= card.updated_at);

    Ok(())
}

/// Tests updating a template that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_template_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardTemplateRepository::new(db);
    let result = repo
        .update(UpdateCardTemplateParams {
            id: 999,
            name: "Ghost".to_string(),
            description: String::new(),
            flavor_text: None,
            rarity: "common".to_string(),
            category: "creature".to_string(),
            mana_cost: 1,
            attack: 1,
            defense: 1,
            health: 1,
            artwork_url: None,
            video_url: None,
            has_animation: false,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
