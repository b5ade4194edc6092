//! NFC card instance repository.
//!
//! Physical card bookkeeping: batch provisioning with sequential serials per
//! template, activation onto a player, and revocation. UIDs are generated by
//! the service; the unique column backstops collisions.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub const INSTANCE_STATUS_PROVISIONED: &str = "provisioned";
pub const INSTANCE_STATUS_ACTIVATED: &str = "activated";
pub const INSTANCE_STATUS_REVOKED: &str = "revoked";

pub struct NfcInstanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NfcInstanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::nfc_card_instance::Model>, DbErr> {
        entity::prelude::NfcCardInstance::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_uid(
        &self,
        nfc_uid: &str,
    ) -> Result<Option<entity::nfc_card_instance::Model>, DbErr> {
        entity::prelude::NfcCardInstance::find()
            .filter(entity::nfc_card_instance::Column::NfcUid.eq(nfc_uid))
            .one(self.db)
            .await
    }

    /// Gets the instances minted from a template, by serial number.
    ///
    /// # Arguments
    /// - `template_id` - Card template id
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of instances per page
    ///
    /// # Returns
    /// - `Ok((instances, total))` - Page of instances and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_for_template(
        &self,
        template_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::nfc_card_instance::Model>, u64), DbErr> {
        let paginator = entity::prelude::NfcCardInstance::find()
            .filter(entity::nfc_card_instance::Column::TemplateId.eq(template_id))
            .order_by_asc(entity::nfc_card_instance::Column::SerialNumber)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let instances = paginator.fetch_page(page).await?;

        Ok((instances, total))
    }

    /// Counts the instances minted from a template.
    ///
    /// Deleting a template is refused while this is non-zero; printed cards
    /// outlive catalog edits.
    pub async fn count_for_template(&self, template_id: i32) -> Result<u64, DbErr> {
        entity::prelude::NfcCardInstance::find()
            .filter(entity::nfc_card_instance::Column::TemplateId.eq(template_id))
            .count(self.db)
            .await
    }

    /// Gets the highest serial number minted for a template so far.
    ///
    /// # Returns
    /// - `Ok(Some(serial))` - Highest serial in use
    /// - `Ok(None)` - No instances minted yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn max_serial_for_template(&self, template_id: i32) -> Result<Option<i32>, DbErr> {
        let highest = entity::prelude::NfcCardInstance::find()
            .filter(entity::nfc_card_instance::Column::TemplateId.eq(template_id))
            .order_by_desc(entity::nfc_card_instance::Column::SerialNumber)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(highest.map(|instance| instance.serial_number))
    }

    /// Inserts one provisioned instance.
    ///
    /// # Arguments
    /// - `template_id` - Template the physical card is minted from
    /// - `nfc_uid` - Generated UID to burn onto the tag
    /// - `serial_number` - Position in the template's print run
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted instance
    /// - `Err(DbErr)` - Database error, including UID uniqueness violations
    pub async fn insert(
        &self,
        template_id: i32,
        nfc_uid: &str,
        serial_number: i32,
    ) -> Result<entity::nfc_card_instance::Model, DbErr> {
        entity::nfc_card_instance::ActiveModel {
            id: ActiveValue::NotSet,
            template_id: ActiveValue::Set(template_id),
            nfc_uid: ActiveValue::Set(nfc_uid.to_string()),
            serial_number: ActiveValue::Set(serial_number),
            status: ActiveValue::Set(INSTANCE_STATUS_PROVISIONED.to_string()),
            owner_player_id: ActiveValue::Set(None),
            activated_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Activates an instance onto a player.
    pub async fn activate(
        &self,
        id: i32,
        player_id: i32,
    ) -> Result<entity::nfc_card_instance::Model, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!(
                "NFC instance {} not found during activation",
                id
            )));
        };

        let mut model: entity::nfc_card_instance::ActiveModel = existing.into();
        model.status = ActiveValue::Set(INSTANCE_STATUS_ACTIVATED.to_string());
        model.owner_player_id = ActiveValue::Set(Some(player_id));
        model.activated_at = ActiveValue::Set(Some(Utc::now()));

        model.update(self.db).await
    }

    /// Marks an instance revoked. Ownership is kept for the audit trail.
    pub async fn revoke(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::NfcCardInstance::update_many()
            .filter(entity::nfc_card_instance::Column::Id.eq(id))
            .col_expr(
                entity::nfc_card_instance::Column::Status,
                Expr::value(INSTANCE_STATUS_REVOKED),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts all instances, optionally restricted to one status.
    pub async fn count_all(&self, status: Option<&str>) -> Result<u64, DbErr> {
        let mut find = entity::prelude::NfcCardInstance::find();

        if let Some(status) = status {
            find = find.filter(entity::nfc_card_instance::Column::Status.eq(status));
        }

        find.count(self.db).await
    }
}
