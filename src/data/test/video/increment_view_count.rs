use super::*;

/// Tests bumping the video view counter.
///
/// Expected: Ok with the counter incremented by one per call
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let video = factory::video_item::VideoItemFactory::new(db)
        .view_count(5)
        .build()
        .await?;

    let repo = VideoItemRepository::new(db);
    repo.increment_view_count(video.id).await?;

    assert_eq!(repo.find_by_id(video.id).await?.unwrap().view_count, 6);

    Ok(())
}
