use super::*;

/// Tests admin pagination ordering and totals.
///
/// Expected: Ok with admins ordered by email and the full count as total
#[tokio::test]
async fn orders_by_email_and_reports_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .email("charlie@deckport.io")
        .build()
        .await?;
    factory::admin::AdminFactory::new(db)
        .email("alice@deckport.io")
        .build()
        .await?;
    factory::admin::AdminFactory::new(db)
        .email("bob@deckport.io")
        .build()
        .await?;

    let repo = AdminRepository::new(db);
    let (admins, total) = repo.get_all_paginated(0, 10).await?;

    assert_eq!(total, 3);
    let emails: Vec<&str> = admins.iter().map(|a| a.email.as_str()).collect();
    assert_eq!(
        emails,
        vec![
            "alice@deckport.io",
            "bob@deckport.io",
            "charlie@deckport.io"
        ]
    );

    Ok(())
}

/// Tests fetching a page past the first.
///
/// Expected: Ok with the remaining admins and the unchanged total
#[tokio::test]
async fn second_page_returns_remainder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_admin(db).await?;
    }

    let repo = AdminRepository::new(db);
    let (page, total) = repo.get_all_paginated(1, 3).await?;

    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    Ok(())
}
