//! Admin account management.
//!
//! SuperAdmin-only operations over the admin table. The self-protection
//! rules live here: an admin cannot demote or deactivate their own account,
//! which keeps the last super admin from locking everyone out by accident.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::admin::AdminRepository,
    dto::admin::{AdminDto, PaginatedAdminsDto},
    error::AppError,
    model::{admin::CreateAdminParams, audit::AuditEntryParams},
    rbac::Role,
    service::audit::AuditService,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all admin accounts with pagination.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAdminsDto, AppError> {
        let (admins, total) = AdminRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedAdminsDto {
            admins: admins.into_iter().map(AdminDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Creates a new admin account.
    ///
    /// # Arguments
    /// - `acting_admin_id` - Admin performing the creation, for the audit trail
    /// - `email` / `username` / `password` - New account credentials
    /// - `role` - Role to assign
    ///
    /// # Returns
    /// - `Ok(AdminDto)` - The created account
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Database or hashing error
    pub async fn create(
        &self,
        acting_admin_id: i32,
        email: &str,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<AdminDto, AppError> {
        let repo = AdminRepository::new(self.db);

        if repo.find_by_email(email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Admin with email {} already exists",
                email
            )));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let admin = repo
            .create(CreateAdminParams {
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "admin.create", "admin")
                    .resource_id(admin.id)
                    .detail(json!({ "email": admin.email, "role": admin.role })),
            )
            .await;

        Ok(AdminDto::from(admin))
    }

    /// Changes an admin's role.
    ///
    /// # Returns
    /// - `Ok(AdminDto)` - The updated account
    /// - `Err(AppError::BadRequest)` - Attempted self role change
    /// - `Err(AppError::NotFound)` - No admin with that id
    pub async fn set_role(
        &self,
        acting_admin_id: i32,
        admin_id: i32,
        role: Role,
    ) -> Result<AdminDto, AppError> {
        if acting_admin_id == admin_id {
            return Err(AppError::BadRequest(
                "Admins cannot change their own role".to_string(),
            ));
        }

        let repo = AdminRepository::new(self.db);

        let Some(admin) = repo.find_by_id(admin_id).await? else {
            return Err(AppError::NotFound(format!("Admin {} not found", admin_id)));
        };

        repo.set_role(admin_id, role.as_str()).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "admin.set_role", "admin")
                    .resource_id(admin_id)
                    .detail(json!({ "from": admin.role, "to": role.as_str() })),
            )
            .await;

        Ok(AdminDto::from(entity::admin::Model {
            role: role.as_str().to_string(),
            ..admin
        }))
    }

    /// Activates or deactivates an admin account.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(AppError::BadRequest)` - Attempted self deactivation
    /// - `Err(AppError::NotFound)` - No admin with that id
    pub async fn set_active(
        &self,
        acting_admin_id: i32,
        admin_id: i32,
        is_active: bool,
    ) -> Result<(), AppError> {
        if acting_admin_id == admin_id && !is_active {
            return Err(AppError::BadRequest(
                "Admins cannot deactivate their own account".to_string(),
            ));
        }

        let repo = AdminRepository::new(self.db);

        if repo.find_by_id(admin_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Admin {} not found", admin_id)));
        }

        repo.set_active(admin_id, is_active).await?;

        let action = if is_active {
            "admin.activate"
        } else {
            "admin.deactivate"
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), action, "admin")
                    .resource_id(admin_id),
            )
            .await;

        Ok(())
    }

    /// Resets an admin's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::NotFound)` - No admin with that id
    pub async fn reset_password(
        &self,
        acting_admin_id: i32,
        admin_id: i32,
        password: &str,
    ) -> Result<(), AppError> {
        let repo = AdminRepository::new(self.db);

        if repo.find_by_id(admin_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Admin {} not found", admin_id)));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        repo.set_password_hash(admin_id, &password_hash).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "admin.reset_password", "admin")
                    .resource_id(admin_id),
            )
            .await;

        Ok(())
    }
}
