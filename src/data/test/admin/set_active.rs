use super::*;

/// Tests deactivating and reactivating an admin account.
///
/// Expected: Ok with the flag following each update
#[tokio::test]
async fn toggles_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);

    repo.set_active(admin.id, false).await?;
    assert!(!repo.find_by_id(admin.id).await?.unwrap().is_active);

    repo.set_active(admin.id, true).await?;
    assert!(repo.find_by_id(admin.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests that deactivating one admin leaves the others untouched.
///
/// Expected: only the targeted account is deactivated
#[tokio::test]
async fn only_affects_target_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_admin(db).await?;
    let second = factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);
    repo.set_active(first.id, false).await?;

    assert!(!repo.find_by_id(first.id).await?.unwrap().is_active);
    assert!(repo.find_by_id(second.id).await?.unwrap().is_active);

    Ok(())
}
