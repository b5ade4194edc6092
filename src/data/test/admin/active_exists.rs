use super::*;

/// Tests the active-admin check on an empty table.
///
/// Expected: active_exists and any_exists both false
#[tokio::test]
async fn empty_table_has_no_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);

    assert!(!repo.active_exists().await?);
    assert!(!repo.any_exists().await?);

    Ok(())
}

/// Tests that deactivated accounts do not count as active.
///
/// Deactivating every admin must not reopen bootstrap, so any_exists has
/// to stay true while active_exists goes false.
///
/// Expected: active_exists false, any_exists true
#[tokio::test]
async fn deactivated_admins_do_not_count_as_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = AdminRepository::new(db);

    assert!(!repo.active_exists().await?);
    assert!(repo.any_exists().await?);

    Ok(())
}

/// Tests the active-admin check with one active account.
///
/// Expected: active_exists true
#[tokio::test]
async fn active_admin_is_detected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);

    assert!(repo.active_exists().await?);

    Ok(())
}
