use super::*;

/// Tests the published-only listing used by the public site.
///
/// Expected: Ok with drafts excluded and the admin view seeing everything
#[tokio::test]
async fn published_only_hides_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let published = factory::create_published_article(db, admin.id).await?;
    factory::create_article(db, admin.id).await?;

    let repo = NewsArticleRepository::new(db);

    let (public, total) = repo.get_paginated(true, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(public[0].id, published.id);

    let (all, total) = repo.get_paginated(false, 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}
