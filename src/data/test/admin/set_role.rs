use super::*;

/// Tests updating an admin's role string.
///
/// Expected: Ok with the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_with_role(db, "viewer").await?;

    let repo = AdminRepository::new(db);
    repo.set_role(admin.id, Role::Moderator.as_str()).await?;

    let updated = repo.find_by_id(admin.id).await?.unwrap();
    assert_eq!(updated.role, "moderator");

    Ok(())
}

/// Tests a role update for an id that does not exist.
///
/// Expected: Ok with no rows changed
#[tokio::test]
async fn missing_admin_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    repo.set_role(999, Role::Admin.as_str()).await?;

    Ok(())
}
