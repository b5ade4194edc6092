use super::*;

/// Tests the first publish of an article.
///
/// Expected: Ok with published_at stamped once
#[tokio::test]
async fn first_publish_stamps_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let article = factory::create_article(db, admin.id).await?;
    assert!(article.published_at.is_none());

    let repo = NewsArticleRepository::new(db);
    repo.set_published(article.id, true).await?;

    let published = repo.find_by_id(article.id).await?.unwrap();
    assert!(published.is_published);
    assert!(published.published_at.is_some());

    Ok(())
}

/// Tests unpublishing and republishing an article.
///
/// The publication date marks the first release, so a later republish
/// must not move it.
///
/// Expected: published_at unchanged across the unpublish/republish cycle
#[tokio::test]
async fn republish_keeps_original_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let article = factory::create_article(db, admin.id).await?;

    let repo = NewsArticleRepository::new(db);
    repo.set_published(article.id, true).await?;
    let original = repo.find_by_id(article.id).await?.unwrap().published_at;

    repo.set_published(article.id, false).await?;
    let hidden = repo.find_by_id(article.id).await?.unwrap();
    assert!(!hidden.is_published);
    assert_eq!(hidden.published_at, original);

    repo.set_published(article.id, true).await?;
    let republished = repo.find_by_id(article.id).await?.unwrap();
    assert!(republished.is_published);
    assert_eq!(republished.published_at, original);

    Ok(())
}
