use super::*;

/// Tests creating an announcement.
///
/// Expected: Ok with the announcement unpublished and the window stored
#[tokio::test]
async fn creates_unpublished_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let publish_at = Utc::now() + Duration::hours(1);

    let repo = AnnouncementRepository::new(db);
    let announcement = repo
        .create(CreateAnnouncementParams {
            title: "Season Three".to_string(),
            body: "The new season opens next week.".to_string(),
            audience: "all".to_string(),
            publish_at: Some(publish_at),
            expires_at: None,
            created_by: admin.id,
        })
        .await?;

    assert_eq!(announcement.title, "Season Three");
    assert_eq!(announcement.audience, "all");
    assert!(!announcement.is_published);
    assert!(announcement.publish_at.is_some());
    assert_eq!(announcement.created_by, admin.id);

    Ok(())
}
