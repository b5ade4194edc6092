use super::*;

/// Tests creating a card template.
///
/// Expected: Ok with the stats stored and the template unpublished
#[tokio::test]
async fn creates_unpublished_template() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardTemplateRepository::new(db);
    let card = repo
        .create(CreateCardTemplateParams {
            slug: "ember-drake".to_string(),
            name: "Ember Drake".to_string(),
            description: "A smouldering wyrm.".to_string(),
            flavor_text: Some("Its breath lingers.".to_string()),
            rarity: "legendary".to_string(),
            category: "creature".to_string(),
            mana_cost: 5,
            attack: 6,
            defense: 3,
            health: 7,
            artwork_url: None,
            video_url: None,
            has_animation: false,
        })
        .await?;

    assert_eq!(card.slug, "ember-drake");
    assert_eq!(card.rarity, "legendary");
    assert_eq!(card.mana_cost, 5);
    assert!(!card.is_published);

    Ok(())
}

/// Tests inserting a second template with the same slug.
///
/// Expected: Err from the unique slug column
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::card_template::CardTemplateFactory::new(db)
        .slug("ember-drake")
        .build()
        .await?;

    let repo = CardTemplateRepository::new(db);
    let result = repo
        .create(CreateCardTemplateParams {
            slug: "ember-drake".to_string(),
            name: "Other".to_string(),
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
        .await;

    assert!(result.is_err());

    Ok(())
}
