use super::*;

/// Tests the published-only listing.
///
/// Expected: Ok with drafts excluded from the public view
#[tokio::test]
async fn published_only_hides_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::video_item::VideoItemFactory::new(db)
        .published(true)
        .build()
        .await?;
    factory::create_video(db).await?;

    let repo = VideoItemRepository::new(db);

    let (public, total) = repo.get_paginated(true, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(public[0].id, published.id);

    let (_, total) = repo.get_paginated(false, 0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}
