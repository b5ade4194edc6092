use super::*;

/// Tests bumping the article view counter.
///
/// Expected: Ok with the counter incremented by one per call
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let article = factory::news_article::NewsArticleFactory::new(db, admin.id)
        .view_count(10)
        .build()
        .await?;

    let repo = NewsArticleRepository::new(db);
    repo.increment_view_count(article.id).await?;
    repo.increment_view_count(article.id).await?;

    assert_eq!(repo.find_by_id(article.id).await?.unwrap().view_count, 12);

    Ok(())
}

/// Tests that the bump only touches the targeted article.
///
/// Expected: other articles keep their counts
#[tokio::test]
async fn only_affects_target_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let first = factory::create_article(db, admin.id).await?;
    let second = factory::create_article(db, admin.id).await?;

    let repo = NewsArticleRepository::new(db);
    repo.increment_view_count(first.id).await?;

    assert_eq!(repo.find_by_id(first.id).await?.unwrap().view_count, 1);
    assert_eq!(repo.find_by_id(second.id).await?.unwrap().view_count, 0);

    Ok(())
}
