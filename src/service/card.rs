//! Card catalog and NFC instance management.
//!
//! Catalog CRUD for templates plus the physical-card operations: batch
//! provisioning with generated UIDs and sequential serials, activation onto
//! a player, and revocation. Template deletion is refused while instances
//! exist, since printed cards outlive catalog edits.

use rand::Rng;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::{
        card::CardTemplateRepository,
        nfc::{NfcInstanceRepository, INSTANCE_STATUS_PROVISIONED},
        player::PlayerRepository,
    },
    dto::card::{CardTemplateDto, NfcInstanceDto, PaginatedCardTemplatesDto},
    error::AppError,
    model::{
        audit::AuditEntryParams,
        card::{CardQuery, CreateCardTemplateParams, UpdateCardTemplateParams},
    },
    service::audit::AuditService,
};

/// Cap on one provisioning batch. Print runs above this are split client-side.
const MAX_PROVISION_BATCH: u32 = 1000;

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets card templates with pagination and filters.
    ///
    /// The public catalog passes `published_only = true` in the query; the
    /// admin list sees drafts too.
    pub async fn get_paginated(
        &self,
        query: CardQuery,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCardTemplatesDto, AppError> {
        let (templates, total) = CardTemplateRepository::new(self.db)
            .get_paginated(&query, page, per_page)
            .await?;

        Ok(PaginatedCardTemplatesDto {
            cards: templates.into_iter().map(CardTemplateDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets one template by id.
    pub async fn get_by_id(&self, id: i32) -> Result<CardTemplateDto, AppError> {
        let Some(template) = CardTemplateRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Card template {} not found", id)));
        };

        Ok(CardTemplateDto::from(template))
    }

    /// Gets one published template by slug, for the public catalog.
    ///
    /// Unpublished templates answer 404 here even though they exist; drafts
    /// are not leaked through the public surface.
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<CardTemplateDto, AppError> {
        let template = CardTemplateRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|template| template.is_published);

        let Some(template) = template else {
            return Err(AppError::NotFound(format!("Card {} not found", slug)));
        };

        Ok(CardTemplateDto::from(template))
    }

    /// Creates a card template.
    ///
    /// # Returns
    /// - `Ok(CardTemplateDto)` - The created template, unpublished
    /// - `Err(AppError::Conflict)` - Slug already in use
    pub async fn create(
        &self,
        acting_admin_id: i32,
        params: CreateCardTemplateParams,
    ) -> Result<CardTemplateDto, AppError> {
        let repo = CardTemplateRepository::new(self.db);

        if repo.find_by_slug(&params.slug).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Card template with slug {} already exists",
                params.slug
            )));
        }

        let template = repo.create(params).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "card.create", "card_template")
                    .resource_id(template.id)
                    .detail(json!({ "slug": template.slug })),
            )
            .await;

        Ok(CardTemplateDto::from(template))
    }

    /// Updates a template's mutable fields.
    pub async fn update(
        &self,
        acting_admin_id: i32,
        params: UpdateCardTemplateParams,
    ) -> Result<CardTemplateDto, AppError> {
        let id = params.id;

        let Some(template) = CardTemplateRepository::new(self.db).update(params).await? else {
            return Err(AppError::NotFound(format!("Card template {} not found", id)));
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "card.update", "card_template")
                    .resource_id(id),
            )
            .await;

        Ok(CardTemplateDto::from(template))
    }

    /// Publishes or unpublishes a template.
    pub async fn set_published(
        &self,
        acting_admin_id: i32,
        id: i32,
        is_published: bool,
    ) -> Result<CardTemplateDto, AppError> {
        let repo = CardTemplateRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Card template {} not found", id)));
        }

        repo.set_published(id, is_published).await?;

        let action = if is_published {
            "card.publish"
        } else {
            "card.unpublish"
        };

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), action, "card_template")
                    .resource_id(id),
            )
            .await;

        self.get_by_id(id).await
    }

    /// Deletes a template.
    ///
    /// # Returns
    /// - `Ok(())` - Template deleted
    /// - `Err(AppError::NotFound)` - No template with that id
    /// - `Err(AppError::Conflict)` - NFC instances have been minted from it
    pub async fn delete(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        let repo = CardTemplateRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Card template {} not found", id)));
        }

        let instances = NfcInstanceRepository::new(self.db)
            .count_for_template(id)
            .await?;
        if instances > 0 {
            return Err(AppError::Conflict(format!(
                "Card template {} has {} minted instances and cannot be deleted",
                id, instances
            )));
        }

        repo.delete(id).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "card.delete", "card_template")
                    .resource_id(id),
            )
            .await;

        Ok(())
    }

    /// Gets the instances minted from a template.
    pub async fn get_instances(
        &self,
        template_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<NfcInstanceDto>, u64), AppError> {
        if CardTemplateRepository::new(self.db)
            .find_by_id(template_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Card template {} not found",
                template_id
            )));
        }

        let (instances, total) = NfcInstanceRepository::new(self.db)
            .get_for_template(template_id, page, per_page)
            .await?;

        Ok((
            instances.into_iter().map(NfcInstanceDto::from).collect(),
            total,
        ))
    }

    /// Provisions a batch of NFC instances for a template.
    ///
    /// Serials continue from the highest already minted. UIDs are random;
    /// the unique column catches the astronomically unlikely collision and
    /// the insert is retried once with a fresh UID.
    ///
    /// # Returns
    /// - `Ok(Vec<NfcInstanceDto>)` - The provisioned instances in serial order
    /// - `Err(AppError::BadRequest)` - Zero or oversized batch
    /// - `Err(AppError::NotFound)` - No template with that id
    pub async fn provision_instances(
        &self,
        acting_admin_id: i32,
        template_id: i32,
        count: u32,
    ) -> Result<Vec<NfcInstanceDto>, AppError> {
        if count == 0 || count > MAX_PROVISION_BATCH {
            return Err(AppError::BadRequest(format!(
                "Batch size must be between 1 and {}",
                MAX_PROVISION_BATCH
            )));
        }

        if CardTemplateRepository::new(self.db)
            .find_by_id(template_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Card template {} not found",
                template_id
            )));
        }

        let repo = NfcInstanceRepository::new(self.db);
        let mut serial = repo.max_serial_for_template(template_id).await?.unwrap_or(0);
        let mut provisioned = Vec::with_capacity(count as usize);

        for _ in 0..count {
            serial += 1;

            let instance = match repo.insert(template_id, &generate_nfc_uid(), serial).await {
                Ok(instance) => instance,
                // UID collision; retry once with a fresh one
                Err(_) => repo.insert(template_id, &generate_nfc_uid(), serial).await?,
            };

            provisioned.push(NfcInstanceDto::from(instance));
        }

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "nfc.provision", "card_template")
                    .resource_id(template_id)
                    .detail(json!({ "count": count })),
            )
            .await;

        Ok(provisioned)
    }

    /// Activates a provisioned instance onto a player.
    ///
    /// # Returns
    /// - `Ok(NfcInstanceDto)` - The activated instance
    /// - `Err(AppError::NotFound)` - Unknown UID or player
    /// - `Err(AppError::Conflict)` - Instance already activated or revoked
    pub async fn activate_instance(
        &self,
        acting_admin_id: i32,
        nfc_uid: &str,
        player_id: i32,
    ) -> Result<NfcInstanceDto, AppError> {
        let repo = NfcInstanceRepository::new(self.db);

        let Some(instance) = repo.find_by_uid(nfc_uid).await? else {
            return Err(AppError::NotFound(format!(
                "NFC instance {} not found",
                nfc_uid
            )));
        };

        if instance.status != INSTANCE_STATUS_PROVISIONED {
            return Err(AppError::Conflict(format!(
                "NFC instance {} is {} and cannot be activated",
                nfc_uid, instance.status
            )));
        }

        if PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Player {} not found", player_id)));
        }

        let activated = repo.activate(instance.id, player_id).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "nfc.activate", "nfc_card_instance")
                    .resource_id(activated.id)
                    .detail(json!({ "player_id": player_id })),
            )
            .await;

        Ok(NfcInstanceDto::from(activated))
    }

    /// Revokes an instance.
    ///
    /// # Returns
    /// - `Ok(())` - Instance revoked
    /// - `Err(AppError::NotFound)` - No instance with that id
    /// - `Err(AppError::Conflict)` - Already revoked
    pub async fn revoke_instance(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        let repo = NfcInstanceRepository::new(self.db);

        let Some(instance) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("NFC instance {} not found", id)));
        };

        if instance.status == crate::data::nfc::INSTANCE_STATUS_REVOKED {
            return Err(AppError::Conflict(format!(
                "NFC instance {} is already revoked",
                id
            )));
        }

        repo.revoke(id).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(acting_admin_id), "nfc.revoke", "nfc_card_instance")
                    .resource_id(id),
            )
            .await;

        Ok(())
    }
}

/// Generates a fresh NFC UID: `DKP-` plus 14 uppercase hex characters.
fn generate_nfc_uid() -> String {
    const HEX: &[u8] = b"0123456789ABCDEF";

    let mut rng = rand::rng();
    let suffix: String = (0..14)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect();

    format!("DKP-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the generated UID shape.
    ///
    /// Expected: DKP- prefix followed by 14 uppercase hex characters
    #[test]
    fn nfc_uids_have_expected_shape() {
        for _ in 0..50 {
            let uid = generate_nfc_uid();
            assert_eq!(uid.len(), 18);
            assert!(uid.starts_with("DKP-"));
            assert!(uid[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    /// Tests that consecutive UIDs differ.
    ///
    /// Expected: no immediate repeats from the generator
    #[test]
    fn nfc_uids_are_random() {
        let first = generate_nfc_uid();
        let second = generate_nfc_uid();
        assert_ne!(first, second);
    }
}
