use serde_json::Value;

/// Parameters for one audit log entry.
///
/// Built by services right where the mutation happens, so the entry
/// carries whatever identifiers the caller already has on hand.
#[derive(Debug, Clone)]
pub struct AuditEntryParams {
    /// Acting admin, `None` for system-initiated writes.
    pub admin_id: Option<i32>,
    /// Dotted verb such as `player.ban` or `cms.article.publish`.
    pub action: String,
    /// Resource kind the action touched, such as `player` or `card_template`.
    pub resource: String,
    pub resource_id: Option<i32>,
    /// Free-form context, for example the ban reason or changed fields.
    pub detail: Option<Value>,
}

impl AuditEntryParams {
    pub fn new(admin_id: Option<i32>, action: &str, resource: &str) -> Self {
        Self {
            admin_id,
            action: action.to_string(),
            resource: resource.to_string(),
            resource_id: None,
            detail: None,
        }
    }

    pub fn resource_id(mut self, id: i32) -> Self {
        self.resource_id = Some(id);
        self
    }

    pub fn detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }
}
