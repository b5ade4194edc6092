use super::*;

/// Tests appending an audit entry with full detail.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn appends_full_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = AuditRepository::new(db);
    let entry = repo
        .insert(
            AuditEntryParams::new(Some(admin.id), "player.ban", "player")
                .resource_id(42)
                .detail(json!({"reason": "cheating"})),
        )
        .await?;

    assert_eq!(entry.admin_id, Some(admin.id));
    assert_eq!(entry.action, "player.ban");
    assert_eq!(entry.resource, "player");
    assert_eq!(entry.resource_id, Some(42));
    assert_eq!(entry.detail, Some(json!({"reason": "cheating"})));

    Ok(())
}

/// Tests an entry with no acting admin, as written by system actions.
///
/// Expected: Ok with admin_id absent
#[tokio::test]
async fn allows_system_entries_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditRepository::new(db);
    let entry = repo
        .insert(AuditEntryParams::new(None, "auth.bootstrap", "admin"))
        .await?;

    assert!(entry.admin_id.is_none());
    assert!(entry.resource_id.is_none());
    assert!(entry.detail.is_none());

    Ok(())
}
