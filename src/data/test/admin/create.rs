use super::*;

/// Tests creating an admin account.
///
/// Expected: Ok with an active account carrying the given role
#[tokio::test]
async fn creates_active_admin_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admin = repo
        .create(CreateAdminParams {
            email: "ops@deckport.io".to_string(),
            username: "Ops".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Moderator,
        })
        .await?;

    assert_eq!(admin.email, "ops@deckport.io");
    assert_eq!(admin.role, "moderator");
    assert!(admin.is_active);
    assert!(admin.last_login_at.is_none());

    Ok(())
}

/// Tests inserting a second admin with the same email.
///
/// Expected: Err from the unique email column
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let params = CreateAdminParams {
        email: "ops@deckport.io".to_string(),
        username: "Ops".to_string(),
        password_hash: "hash".to_string(),
        role: Role::Admin,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
