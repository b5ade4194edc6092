//! Admin account repository.
//!
//! Handles admin row creation, lookup, pagination, and the column updates the
//! admin-management and auth services need. Role strings are written through
//! `rbac::Role::as_str` by the callers; this layer treats them as opaque.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::admin::CreateAdminParams;

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new admin account.
    ///
    /// The email column is unique; a duplicate insert surfaces as `DbErr` and
    /// the service maps it to a conflict after checking first.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Model)` - The created admin row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAdminParams) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(params.email),
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Finds an admin by primary key.
    ///
    /// # Arguments
    /// - `id` - Admin id
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Admin found
    /// - `Ok(None)` - No admin with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find_by_id(id).one(self.db).await
    }

    /// Finds an admin by login email.
    ///
    /// # Arguments
    /// - `email` - Login email, matched exactly
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Admin found
    /// - `Ok(None)` - No admin with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether any active admin account exists.
    ///
    /// Used during startup to decide whether to open the one-time bootstrap
    /// window. Deactivated accounts do not count.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one active admin exists
    /// - `Ok(false)` - No active admin (fresh deployment or all deactivated)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn active_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find()
            .filter(entity::admin::Column::IsActive.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any admin account exists, active or not.
    ///
    /// Bootstrap must refuse once any account exists at all, otherwise
    /// deactivating every admin would reopen first-admin creation.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the admin table is non-empty
    /// - `Err(DbErr)` - Database error during count query
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find().count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets all admins with pagination, ordered by email.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of admins per page
    ///
    /// # Returns
    /// - `Ok((admins, total))` - Page of admins and the total admin count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::admin::Model>, u64), DbErr> {
        let paginator = entity::prelude::Admin::find()
            .order_by_asc(entity::admin::Column::Email)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let admins = paginator.fetch_page(page).await?;

        Ok((admins, total))
    }

    /// Updates an admin's role.
    ///
    /// # Arguments
    /// - `id` - Admin id
    /// - `role` - New role string from `rbac::Role::as_str`
    ///
    /// # Returns
    /// - `Ok(())` - Role updated (no-op if the id does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: &str) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .filter(entity::admin::Column::Id.eq(id))
            .col_expr(
                entity::admin::Column::Role,
                sea_orm::sea_query::Expr::value(role),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Activates or deactivates an admin account.
    ///
    /// # Arguments
    /// - `id` - Admin id
    /// - `is_active` - Whether the account may log in
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated (no-op if the id does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .filter(entity::admin::Column::Id.eq(id))
            .col_expr(
                entity::admin::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces an admin's stored password hash.
    ///
    /// # Arguments
    /// - `id` - Admin id
    /// - `password_hash` - New bcrypt hash
    ///
    /// # Returns
    /// - `Ok(())` - Hash replaced (no-op if the id does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_password_hash(&self, id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .filter(entity::admin::Column::Id.eq(id))
            .col_expr(
                entity::admin::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stamps the last successful login time.
    ///
    /// # Arguments
    /// - `id` - Admin id
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .filter(entity::admin::Column::Id.eq(id))
            .col_expr(
                entity::admin::Column::LastLoginAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
