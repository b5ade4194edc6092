use super::*;

/// Tests the live filter across every window state.
///
/// Live means published, past the window start (or no start), and before
/// the expiry (or no expiry). Everything else stays hidden.
///
/// Expected: Ok with only the currently live announcements
#[tokio::test]
async fn returns_only_live_announcements() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let now = Utc::now();

    let live_no_window = factory::announcement::AnnouncementFactory::new(db, admin.id)
        .published(true)
        .build()
        .await?;
    let live_in_window = factory::announcement::AnnouncementFactory::new(db, admin.id)
        .published(true)
        .publish_at(Some(now - Duration::hours(1)))
        .expires_at(Some(now + Duration::hours(1)))
        .build()
        .await?;

    // Draft, not-yet-open, and expired entries must all stay hidden
    factory::announcement::AnnouncementFactory::new(db, admin.id)
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db, admin.id)
        .published(true)
        .publish_at(Some(now + Duration::hours(1)))
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db, admin.id)
        .published(true)
        .expires_at(Some(now - Duration::hours(1)))
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let live = repo.get_live().await?;

    let ids: Vec<i32> = live.iter().map(|a| a.id).collect();
    assert_eq!(live.len(), 2);
    assert!(ids.contains(&live_no_window.id));
    assert!(ids.contains(&live_in_window.id));

    Ok(())
}

/// Tests that unpublishing removes an announcement from the live set.
///
/// Expected: Ok with the announcement gone after set_published(false)
#[tokio::test]
async fn unpublished_announcement_leaves_live_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let announcement = factory::announcement::AnnouncementFactory::new(db, admin.id)
        .published(true)
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    assert_eq!(repo.get_live().await?.len(), 1);

    repo.set_published(announcement.id, false).await?;
    assert!(repo.get_live().await?.is_empty());

    Ok(())
}
