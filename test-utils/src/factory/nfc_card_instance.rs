//! NFC card instance factory for creating test card instance entities.
//!
//! This module provides factory methods for creating NFC card instances with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test NFC card instances with customizable fields.
///
/// Provides a builder pattern for creating instance entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::nfc_card_instance::NfcCardInstanceFactory;
///
/// let instance = NfcCardInstanceFactory::new(&db, template.id)
///     .status("activated")
///     .owner_player_id(Some(player.id))
///     .build()
///     .await?;
/// ```
pub struct NfcCardInstanceFactory<'a> {
    db: &'a DatabaseConnection,
    template_id: i32,
    nfc_uid: String,
    serial_number: i32,
    status: String,
    owner_player_id: Option<i32>,
    activated_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> NfcCardInstanceFactory<'a> {
    /// Creates a new NfcCardInstanceFactory with default values.
    ///
    /// Defaults:
    /// - nfc_uid: `"DKP-{id:014X}"` where id is auto-incremented
    /// - serial_number: auto-incremented
    /// - status: `"provisioned"`
    /// - owner_player_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `template_id` - Card template ID this instance is minted from
    ///
    /// # Returns
    /// - `NfcCardInstanceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, template_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            template_id,
            nfc_uid: format!("DKP-{:014X}", id),
            serial_number: id as i32,
            status: "provisioned".to_string(),
            owner_player_id: None,
            activated_at: None,
        }
    }

    /// Sets the NFC UID for the instance.
    ///
    /// # Arguments
    /// - `nfc_uid` - Unique NFC chip identifier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn nfc_uid(mut self, nfc_uid: impl Into<String>) -> Self {
        self.nfc_uid = nfc_uid.into();
        self
    }

    /// Sets the lifecycle status for the instance.
    ///
    /// # Arguments
    /// - `status` - One of `provisioned`, `activated`, `revoked`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the owning player for the instance.
    ///
    /// # Arguments
    /// - `owner_player_id` - Player ID, or `None` for unowned
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn owner_player_id(mut self, owner_player_id: Option<i32>) -> Self {
        self.owner_player_id = owner_player_id;
        self
    }

    /// Sets the activation timestamp for the instance.
    ///
    /// # Arguments
    /// - `activated_at` - When the card was activated
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn activated_at(mut self, activated_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.activated_at = activated_at;
        self
    }

    /// Builds and inserts the NFC card instance entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::nfc_card_instance::Model)` - Created instance entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::nfc_card_instance::Model, DbErr> {
        entity::nfc_card_instance::ActiveModel {
            id: ActiveValue::NotSet,
            template_id: ActiveValue::Set(self.template_id),
            nfc_uid: ActiveValue::Set(self.nfc_uid),
            serial_number: ActiveValue::Set(self.serial_number),
            status: ActiveValue::Set(self.status),
            owner_player_id: ActiveValue::Set(self.owner_player_id),
            activated_at: ActiveValue::Set(self.activated_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an NFC card instance with default values for the specified template.
///
/// Shorthand for `NfcCardInstanceFactory::new(db, template_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `template_id` - Card template ID
///
/// # Returns
/// - `Ok(entity::nfc_card_instance::Model)` - Created instance entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let instance = create_instance(&db, template.id).await?;
/// ```
pub async fn create_instance(
    db: &DatabaseConnection,
    template_id: i32,
) -> Result<entity::nfc_card_instance::Model, DbErr> {
    NfcCardInstanceFactory::new(db, template_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::card_template::create_template;

    #[tokio::test]
    async fn creates_instance_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let template = create_template(db).await?;
        let instance = create_instance(db, template.id).await?;

        assert_eq!(instance.template_id, template.id);
        assert!(instance.nfc_uid.starts_with("DKP-"));
        assert_eq!(instance.status, "provisioned");
        assert!(instance.owner_player_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_instances_with_unique_uids() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let template = create_template(db).await?;
        let first = create_instance(db, template.id).await?;
        let second = create_instance(db, template.id).await?;

        assert_ne!(first.nfc_uid, second.nfc_uid);
        assert_ne!(first.serial_number, second.serial_number);

        Ok(())
    }
}
