use super::*;

/// Tests looking up an article by slug.
///
/// Expected: Ok(Some) for the stored slug, Ok(None) otherwise
#[tokio::test]
async fn finds_article_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let article = factory::news_article::NewsArticleFactory::new(db, admin.id)
        .slug("patch-notes-1-2")
        .build()
        .await?;

    let repo = NewsArticleRepository::new(db);

    let found = repo.find_by_slug("patch-notes-1-2").await?;
    assert_eq!(found.map(|a| a.id), Some(article.id));

    let missing = repo.find_by_slug("patch-notes-9-9").await?;
    assert!(missing.is_none());

    Ok(())
}
