//! Admin authentication: login, bootstrap, and token plumbing.

pub mod code;
pub mod token;

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::admin::AdminRepository,
    dto::{admin::AdminDto, auth::TokenResponseDto},
    error::{auth::AuthError, AppError},
    model::{admin::CreateAdminParams, audit::AuditEntryParams},
    rbac::Role,
    service::{
        audit::AuditService,
        auth::{code::SetupCodeService, token::TokenService},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates an admin by email and password and issues a token.
    ///
    /// Unknown emails and wrong passwords both return `InvalidCredentials`,
    /// so the endpoint cannot be used to probe for registered addresses. The
    /// bcrypt verify runs even for inactive accounts; the account state check
    /// comes after so disabled admins get the 403 rather than a generic 401.
    ///
    /// # Arguments
    /// - `email` - Login email
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(TokenResponseDto)` - Token, expiry, and the admin profile
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Correct credentials, inactive account
    /// - `Err(AppError)` - Database or hashing error
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponseDto, AppError> {
        let repo = AdminRepository::new(self.db);

        let Some(admin) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &admin.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !admin.is_active {
            return Err(AuthError::AccountDisabled(admin.id).into());
        }

        repo.touch_last_login(admin.id).await?;

        let (token, expires_at) = self.tokens.issue(admin.id, &admin.email, &admin.role)?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(admin.id), "auth.login", "admin")
                    .resource_id(admin.id),
            )
            .await;

        Ok(TokenResponseDto {
            token,
            expires_at,
            admin: AdminDto::from(admin),
        })
    }

    /// Creates the first super admin from a one-time setup code.
    ///
    /// Refused outright once any admin row exists, active or not; reopening
    /// bootstrap on a populated table would be a takeover path. The code
    /// check consumes the code on success.
    ///
    /// # Arguments
    /// - `setup_codes` - In-memory code store populated at startup
    /// - `setup_code` - Code from the bootstrap request
    /// - `email` / `username` / `password` - First account's credentials
    ///
    /// # Returns
    /// - `Ok(TokenResponseDto)` - Token for the newly created super admin
    /// - `Err(AppError::Conflict)` - An admin already exists
    /// - `Err(AuthError::InvalidSetupCode)` - Wrong or expired code
    /// - `Err(AppError)` - Database or hashing error
    pub async fn bootstrap(
        &self,
        setup_codes: &SetupCodeService,
        setup_code: &str,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<TokenResponseDto, AppError> {
        let repo = AdminRepository::new(self.db);

        if repo.any_exists().await? {
            return Err(AppError::Conflict(
                "An admin account already exists".to_string(),
            ));
        }

        if !setup_codes.validate_and_consume(setup_code).await {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let admin = repo
            .create(CreateAdminParams {
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
                role: Role::SuperAdmin,
            })
            .await?;

        tracing::info!("Bootstrap created first super admin {}", admin.id);

        let (token, expires_at) = self.tokens.issue(admin.id, &admin.email, &admin.role)?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(admin.id), "auth.bootstrap", "admin")
                    .resource_id(admin.id)
                    .detail(json!({ "email": admin.email })),
            )
            .await;

        Ok(TokenResponseDto {
            token,
            expires_at,
            admin: AdminDto::from(admin),
        })
    }
}
