use super::*;

/// Tests looking up an admin by login email.
///
/// Expected: Ok(Some) for the stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_admin_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .email("lookup@deckport.io")
        .build()
        .await?;

    let repo = AdminRepository::new(db);

    let found = repo.find_by_email("lookup@deckport.io").await?;
    assert_eq!(found.map(|a| a.id), Some(admin.id));

    let missing = repo.find_by_email("other@deckport.io").await?;
    assert!(missing.is_none());

    Ok(())
}
