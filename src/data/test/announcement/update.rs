use super::*;

/// Tests updating an announcement's content and window.
///
/// Expected: Ok(Some) with the new fields and the author unchanged
#[tokio::test]
async fn updates_content_and_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let announcement = factory::create_announcement(db, admin.id).await?;
    let expires = Utc::now() + Duration::days(3);

    let repo = AnnouncementRepository::new(db);
    let updated = repo
        .update(UpdateAnnouncementParams {
            id: announcement.id,
            title: "Updated".to_string(),
            body: "New body.".to_string(),
            audience: "players".to_string(),
            publish_at: None,
            expires_at: Some(expires),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.audience, "players");
    assert!(updated.expires_at.is_some());
    assert_eq!(updated.created_by, admin.id);

    Ok(())
}

/// Tests updating an announcement that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_announcement_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let result = repo
        .update(UpdateAnnouncementParams {
            id: 999,
            title: "Ghost".to_string(),
            body: String::new(),
            audience: "all".to_string(),
            publish_at: None,
            expires_at: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
