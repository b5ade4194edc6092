//! Admin factory for creating test admin account entities.
//!
//! This module provides factory methods for creating admin entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admins with customizable fields.
///
/// Provides a builder pattern for creating admin entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::admin::AdminFactory;
///
/// let admin = AdminFactory::new(&db)
///     .email("ops@deckport.io")
///     .role("super_admin")
///     .build()
///     .await?;
/// ```
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    username: String,
    password_hash: String,
    role: String,
    is_active: bool,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - email: `"admin{id}@deckport.io"` where id is auto-incremented
    /// - username: `"Admin {id}"`
    /// - password_hash: `"test-hash"` (not a real bcrypt hash)
    /// - role: `"admin"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AdminFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("admin{}@deckport.io", id),
            username: format!("Admin {}", id),
            password_hash: "test-hash".to_string(),
            role: "admin".to_string(),
            is_active: true,
        }
    }

    /// Sets the email for the admin.
    ///
    /// # Arguments
    /// - `email` - Login email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the username for the admin.
    ///
    /// # Arguments
    /// - `username` - Display name for the admin
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash for the admin.
    ///
    /// Pass a real bcrypt hash here when the test needs to exercise login.
    ///
    /// # Arguments
    /// - `password_hash` - Hash to store verbatim
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role for the admin.
    ///
    /// # Arguments
    /// - `role` - Role name, e.g. `"viewer"` or `"super_admin"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets whether the admin account is active.
    ///
    /// # Arguments
    /// - `is_active` - Whether the account can log in
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the admin entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin::Model)` - Created admin entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            is_active: ActiveValue::Set(self.is_active),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
///
/// Shorthand for `AdminFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::admin::Model)` - Created admin entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let admin = create_admin(&db).await?;
/// ```
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}

/// Creates an admin with a specific role.
///
/// Shorthand for `AdminFactory::new(db).role(role).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role name, e.g. `"moderator"`
///
/// # Returns
/// - `Ok(entity::admin::Model)` - Created admin entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let viewer = create_admin_with_role(&db, "viewer").await?;
/// ```
pub async fn create_admin_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).role(role).build().await
}
