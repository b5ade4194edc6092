use super::*;

/// Tests the published-only filter used by the public catalog.
///
/// Expected: Ok with drafts excluded
#[tokio::test]
async fn published_only_hides_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::create_published_template(db).await?;
    factory::create_template(db).await?;

    let repo = CardTemplateRepository::new(db);
    let query = CardQuery {
        published_only: true,
        ..empty_query()
    };
    let (cards, total) = repo.get_paginated(&query, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(cards[0].id, published.id);

    Ok(())
}

/// Tests the rarity and category filters together.
///
/// Expected: Ok with only templates matching both
#[tokio::test]
async fn filters_by_rarity_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::card_template::CardTemplateFactory::new(db)
        .rarity("epic")
        .category("equipment")
        .build()
        .await?;
    factory::card_template::CardTemplateFactory::new(db)
        .rarity("epic")
        .category("creature")
        .build()
        .await?;
    factory::card_template::CardTemplateFactory::new(db)
        .rarity("common")
        .category("equipment")
        .build()
        .await?;

    let repo = CardTemplateRepository::new(db);
    let query = CardQuery {
        rarity: Some("epic".to_string()),
        category: Some("equipment".to_string()),
        ..empty_query()
    };
    let (cards, total) = repo.get_paginated(&query, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(cards[0].id, wanted.id);

    Ok(())
}

/// Tests the case-insensitive name search.
///
/// Expected: Ok with substring matches regardless of case
#[tokio::test]
async fn searches_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drake = factory::card_template::CardTemplateFactory::new(db)
        .name("Ember Drake")
        .build()
        .await?;
    factory::card_template::CardTemplateFactory::new(db)
        .name("Stone Golem")
        .build()
        .await?;

    let repo = CardTemplateRepository::new(db);
    let query = CardQuery {
        q: Some("DRAKE".to_string()),
        ..empty_query()
    };
    let (cards, total) = repo.get_paginated(&query, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(cards[0].id, drake.id);

    Ok(())
}
