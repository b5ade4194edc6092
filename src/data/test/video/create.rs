use super::*;

/// Tests creating a video item.
///
/// Expected: Ok with the video unpublished and the counter at zero
#[tokio::test]
async fn creates_draft_video() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VideoItemRepository::new(db);
    let video = repo
        .create(CreateVideoParams {
            title: "Deck Building 101".to_string(),
            description: "Basics for new players.".to_string(),
            video_url: "https://cdn.deckport.io/v/101.mp4".to_string(),
            thumbnail_url: None,
            duration_seconds: 412,
        })
        .await?;

    assert_eq!(video.title, "Deck Building 101");
    assert_eq!(video.duration_seconds, 412);
    assert!(!video.is_published);
    assert_eq!(video.view_count, 0);

    Ok(())
}
