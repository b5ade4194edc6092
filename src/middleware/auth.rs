//! Bearer-token authentication guard.
//!
//! `AuthGuard` turns an `Authorization: Bearer <jwt>` header into the acting
//! admin: validate the token, load the admin row, reject missing or inactive
//! accounts, then check an explicit permission slice. The RBAC middleware
//! drives it with the permission resolved from the route table; handlers
//! with requirements the table cannot express call it directly.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::admin::AdminRepository,
    error::{auth::AuthError, AppError},
    rbac::{Permission, Role},
    service::auth::token::TokenService,
};

/// The authenticated admin for the current request.
///
/// Inserted into request extensions by the RBAC middleware so handlers can
/// take it with `Extension<CurrentAdmin>` without re-authenticating.
#[derive(Clone)]
pub struct CurrentAdmin {
    pub admin: entity::admin::Model,
    pub role: Role,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates the request and checks a permission slice.
    ///
    /// The token's role claim is ignored for enforcement; the role is
    /// re-read from the admin row so demotions apply immediately.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the Authorization header
    /// - `permissions` - Permissions the admin's role must grant; empty
    ///   means authentication only
    ///
    /// # Returns
    /// - `Ok(CurrentAdmin)` - Authenticated admin holding every permission
    /// - `Err(AuthError::MissingToken)` - No bearer header
    /// - `Err(AuthError::InvalidToken)` - Bad or expired token
    /// - `Err(AuthError::AdminNotFound)` - Token subject no longer exists
    /// - `Err(AuthError::AccountDisabled)` - Admin has been deactivated
    /// - `Err(AuthError::AccessDenied)` - Role lacks a listed permission
    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<CurrentAdmin, AppError> {
        let token = extract_bearer(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.validate(token)?;

        let Some(admin) = AdminRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::AdminNotFound(claims.sub).into());
        };

        if !admin.is_active {
            return Err(AuthError::AccountDisabled(admin.id).into());
        }

        // Role comes from the row, not the claim
        let role = Role::from_str(&admin.role).unwrap_or(Role::Viewer);

        for permission in permissions {
            if !role.grants(*permission) {
                return Err(
                    AuthError::AccessDenied(admin.id, permission.as_str().to_string()).into(),
                );
            }
        }

        Ok(CurrentAdmin { admin, role })
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
