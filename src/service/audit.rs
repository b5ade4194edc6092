//! Audit trail service.
//!
//! Mutating admin operations call `record` from inside the same service call
//! that performs the mutation. A failed audit write is logged and swallowed;
//! the operation that triggered it must never fail because the trail could
//! not be written.

use sea_orm::DatabaseConnection;

use crate::{
    data::audit::AuditRepository,
    dto::audit::{AuditEntryDto, PaginatedAuditEntriesDto},
    error::AppError,
    model::audit::AuditEntryParams,
};

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one entry to the audit trail.
    ///
    /// Infallible by contract: a database error is logged at error level and
    /// dropped so the caller's mutation still succeeds.
    ///
    /// # Arguments
    /// - `params` - Entry fields built at the mutation site
    pub async fn record(&self, params: AuditEntryParams) {
        let action = params.action.clone();

        if let Err(err) = AuditRepository::new(self.db).insert(params).await {
            tracing::error!("Failed to write audit entry for {}: {}", action, err);
        }
    }

    /// Gets the audit trail with pagination and optional filters.
    ///
    /// # Arguments
    /// - `admin_id` - Restrict to one acting admin
    /// - `resource` - Restrict to one resource kind
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Entries per page
    ///
    /// # Returns
    /// - `Ok(PaginatedAuditEntriesDto)` - Page of entries
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(
        &self,
        admin_id: Option<i32>,
        resource: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAuditEntriesDto, AppError> {
        let (entries, total) = AuditRepository::new(self.db)
            .get_paginated(admin_id, resource, page, per_page)
            .await?;

        Ok(PaginatedAuditEntriesDto {
            entries: entries.into_iter().map(AuditEntryDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }
}
