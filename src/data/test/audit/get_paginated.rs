use super::*;

/// Tests the admin and resource filters on the audit trail.
///
/// Expected: Ok with only entries matching the given filters
#[tokio::test]
async fn filters_by_admin_and_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_admin(db).await?;
    let second = factory::create_admin(db).await?;

    let repo = AuditRepository::new(db);
    repo.insert(AuditEntryParams::new(Some(first.id), "player.warn", "player"))
        .await?;
    repo.insert(AuditEntryParams::new(Some(first.id), "card.create", "card_template"))
        .await?;
    repo.insert(AuditEntryParams::new(Some(second.id), "player.ban", "player"))
        .await?;

    let (by_admin, total) = repo.get_paginated(Some(first.id), None, 0, 10).await?;
    assert_eq!(total, 2);
    assert!(by_admin.iter().all(|e| e.admin_id == Some(first.id)));

    let (by_resource, total) = repo.get_paginated(None, Some("player"), 0, 10).await?;
    assert_eq!(total, 2);
    assert!(by_resource.iter().all(|e| e.resource == "player"));

    let (both, total) = repo
        .get_paginated(Some(second.id), Some("player"), 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(both[0].action, "player.ban");

    Ok(())
}

/// Tests that the trail comes back newest first.
///
/// Expected: Ok with descending ids
#[tokio::test]
async fn newest_entries_come_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = AuditRepository::new(db);
    for action in ["first", "second", "third"] {
        repo.insert(AuditEntryParams::new(Some(admin.id), action, "player"))
            .await?;
    }

    let (entries, _) = repo.get_paginated(None, None, 0, 10).await?;
    assert_eq!(entries[0].action, "third");
    assert_eq!(entries[2].action, "first");

    Ok(())
}
