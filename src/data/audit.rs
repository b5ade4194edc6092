//! Audit log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::audit::AuditEntryParams;

pub struct AuditRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one audit entry.
    pub async fn insert(&self, params: AuditEntryParams) -> Result<entity::audit_log::Model, DbErr> {
        entity::audit_log::ActiveModel {
            id: ActiveValue::NotSet,
            admin_id: ActiveValue::Set(params.admin_id),
            action: ActiveValue::Set(params.action),
            resource: ActiveValue::Set(params.resource),
            resource_id: ActiveValue::Set(params.resource_id),
            detail: ActiveValue::Set(params.detail),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets audit entries with pagination and optional filters, newest first.
    ///
    /// # Arguments
    /// - `admin_id` - Restrict to one acting admin
    /// - `resource` - Restrict to one resource kind, e.g. `player`
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Page of entries and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        admin_id: Option<i32>,
        resource: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::audit_log::Model>, u64), DbErr> {
        let mut find = entity::prelude::AuditLog::find();

        if let Some(admin_id) = admin_id {
            find = find.filter(entity::audit_log::Column::AdminId.eq(admin_id));
        }

        if let Some(resource) = resource {
            find = find.filter(entity::audit_log::Column::Resource.eq(resource));
        }

        let paginator = find
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entries = paginator.fetch_page(page).await?;

        Ok((entries, total))
    }
}
