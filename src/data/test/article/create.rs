use super::*;

/// Tests creating a news article.
///
/// Expected: Ok with the article unpublished and the view counter at zero
#[tokio::test]
async fn creates_draft_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = NewsArticleRepository::new(db);
    let article = repo
        .create(CreateArticleParams {
            slug: "season-three-preview".to_string(),
            title: "Season Three Preview".to_string(),
            summary: "What's coming.".to_string(),
            body: "Long-form body.".to_string(),
            hero_image_url: None,
            author_id: admin.id,
        })
        .await?;

    assert_eq!(article.slug, "season-three-preview");
    assert!(!article.is_published);
    assert!(article.published_at.is_none());
    assert_eq!(article.view_count, 0);
    assert_eq!(article.author_id, admin.id);

    Ok(())
}

/// Tests inserting a second article with the same slug.
///
/// Expected: Err from the unique slug column
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    factory::news_article::NewsArticleFactory::new(db, admin.id)
        .slug("season-three-preview")
        .build()
        .await?;

    let repo = NewsArticleRepository::new(db);
    let result = repo
        .create(CreateArticleParams {
            slug: "season-three-preview".to_string(),
            title: "Other".to_string(),
            summary: String::new(),
            body: String::new(),
            hero_image_url: None,
            author_id: admin.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
