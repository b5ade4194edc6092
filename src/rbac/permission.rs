use crate::rbac::Role;

/// Granular permission verbs checked by the route policy table and guards.
///
/// Each permission names the minimum role that holds it via
/// `required_role()`. Roles above that minimum hold it by inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    PlayerView,
    PlayerWarn,
    PlayerBan,
    CardView,
    CardManage,
    CardPublish,
    NfcManage,
    ArenaView,
    ArenaManage,
    ArenaGenerate,
    CmsManage,
    CmsPublish,
    BillingView,
    AnalyticsView,
    AuditView,
    AdminManage,
    SystemAdmin,
}

impl Permission {
    /// The lowest role in the hierarchy that holds this permission.
    pub fn required_role(&self) -> Role {
        match self {
            Permission::PlayerView
            | Permission::CardView
            | Permission::ArenaView
            | Permission::AnalyticsView => Role::Viewer,

            Permission::PlayerWarn | Permission::BillingView => Role::Support,

            Permission::PlayerBan | Permission::CmsManage => Role::Moderator,

            Permission::CardManage
            | Permission::CardPublish
            | Permission::NfcManage
            | Permission::ArenaManage
            | Permission::ArenaGenerate
            | Permission::CmsPublish
            | Permission::AuditView => Role::Admin,

            Permission::AdminManage | Permission::SystemAdmin => Role::SuperAdmin,
        }
    }

    /// Short name used in denial log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PlayerView => "player:view",
            Permission::PlayerWarn => "player:warn",
            Permission::PlayerBan => "player:ban",
            Permission::CardView => "card:view",
            Permission::CardManage => "card:manage",
            Permission::CardPublish => "card:publish",
            Permission::NfcManage => "nfc:manage",
            Permission::ArenaView => "arena:view",
            Permission::ArenaManage => "arena:manage",
            Permission::ArenaGenerate => "arena:generate",
            Permission::CmsManage => "cms:manage",
            Permission::CmsPublish => "cms:publish",
            Permission::BillingView => "billing:view",
            Permission::AnalyticsView => "analytics:view",
            Permission::AuditView => "audit:view",
            Permission::AdminManage => "admin:manage",
            Permission::SystemAdmin => "system:admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the support tier permission assignments.
    ///
    /// Expected: warn and billing sit at Support, ban at Moderator
    #[test]
    fn moderation_ladder_is_ordered() {
        assert_eq!(Permission::PlayerView.required_role(), Role::Viewer);
        assert_eq!(Permission::PlayerWarn.required_role(), Role::Support);
        assert_eq!(Permission::PlayerBan.required_role(), Role::Moderator);
    }

    /// Tests that catalog and arena management requires the Admin tier.
    ///
    /// Expected: manage/publish/generate permissions all map to Admin
    #[test]
    fn management_permissions_require_admin() {
        for permission in [
            Permission::CardManage,
            Permission::CardPublish,
            Permission::NfcManage,
            Permission::ArenaManage,
            Permission::ArenaGenerate,
            Permission::CmsPublish,
            Permission::AuditView,
        ] {
            assert_eq!(permission.required_role(), Role::Admin);
        }
    }

    /// Tests that only SuperAdmin can manage admins or reach unmapped routes.
    ///
    /// Expected: AdminManage and SystemAdmin map to SuperAdmin
    #[test]
    fn admin_management_requires_super_admin() {
        assert_eq!(Permission::AdminManage.required_role(), Role::SuperAdmin);
        assert_eq!(Permission::SystemAdmin.required_role(), Role::SuperAdmin);
    }
}
