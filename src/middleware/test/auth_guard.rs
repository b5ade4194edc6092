use super::*;

/// Tests a request with no Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn missing_header_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let guard = AuthGuard::new(db, &tokens);

    let result = guard.require(&HeaderMap::new(), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a bearer token that is not a valid JWT.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn garbage_token_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let guard = AuthGuard::new(db, &tokens);

    let result = guard.require(&bearer_headers("not-a-jwt"), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a token that expired before the request.
///
/// The negative TTL puts the expiry beyond the validator's leeway.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn expired_token_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let expired = TokenService::new(TEST_SECRET, -120);
    let (token, _) = expired.issue(admin.id, &admin.email, &admin.role).unwrap();

    let tokens = tokens();
    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require(&bearer_headers(&token), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token whose subject no longer exists.
///
/// Expected: Err(AdminNotFound)
#[tokio::test]
async fn deleted_admin_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let (token, _) = tokens.issue(999, "gone@deckport.io", "admin").unwrap();

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require(&bearer_headers(&token), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotFound(999)))
    ));

    Ok(())
}

/// Tests a valid token for a deactivated account.
///
/// Expected: Err(AccountDisabled)
#[tokio::test]
async fn inactive_admin_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let tokens = tokens();
    let (token, _) = tokens.issue(admin.id, &admin.email, &admin.role).unwrap();

    let guard = AuthGuard::new(db, &tokens);
    let result = guard.require(&bearer_headers(&token), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}

/// Tests a role that lacks the required permission.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn insufficient_role_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_with_role(db, "viewer").await?;

    let tokens = tokens();
    let (token, _) = tokens.issue(admin.id, &admin.email, &admin.role).unwrap();

    let guard = AuthGuard::new(db, &tokens);
    let result = guard
        .require(&bearer_headers(&token), &[Permission::PlayerBan])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a role that holds the required permissions.
///
/// Expected: Ok with the admin and role attached
#[tokio::test]
async fn sufficient_role_passes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_with_role(db, "moderator").await?;

    let tokens = tokens();
    let (token, _) = tokens.issue(admin.id, &admin.email, &admin.role).unwrap();

    let guard = AuthGuard::new(db, &tokens);
    let current = guard
        .require(
            &bearer_headers(&token),
            &[Permission::PlayerView, Permission::PlayerWarn],
        )
        .await
        .unwrap();

    assert_eq!(current.admin.id, admin.id);
    assert_eq!(current.role.as_str(), "moderator");

    Ok(())
}

/// Tests that enforcement reads the role from the row, not the claim.
///
/// A token minted while the admin was a super admin must stop working
/// the moment the row is demoted.
///
/// Expected: Err(AccessDenied) despite the elevated claim
#[tokio::test]
async fn demotion_applies_before_token_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_with_role(db, "super_admin").await?;

    let tokens = tokens();
    let (token, _) = tokens.issue(admin.id, &admin.email, "super_admin").unwrap();

    crate::data::admin::AdminRepository::new(db)
        .set_role(admin.id, "viewer")
        .await?;

    let guard = AuthGuard::new(db, &tokens);
    let result = guard
        .require(&bearer_headers(&token), &[Permission::PlayerBan])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
