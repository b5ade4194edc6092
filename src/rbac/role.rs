use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rbac::Permission;

/// Admin role in the five-level hierarchy.
///
/// Roles are strictly ordered. A role holds a permission when its level is at
/// least the permission's minimum role level, so higher roles inherit
/// everything below them. The string form is what gets stored on the admin
/// row and embedded in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Viewer,
    Support,
    Moderator,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Position in the hierarchy, 0 for `Viewer` through 4 for `SuperAdmin`.
    pub fn level(&self) -> u8 {
        match self {
            Role::Viewer => 0,
            Role::Support => 1,
            Role::Moderator => 2,
            Role::Admin => 3,
            Role::SuperAdmin => 4,
        }
    }

    /// Storage and claim representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Support => "support",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Parses the storage representation back into a role.
    ///
    /// # Arguments
    /// - `value` - String as stored in the database or token claim
    ///
    /// # Returns
    /// - `Some(Role)` - Recognized role string
    /// - `None` - Unknown value
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "viewer" => Some(Role::Viewer),
            "support" => Some(Role::Support),
            "moderator" => Some(Role::Moderator),
            "admin" => Some(Role::Admin),
            "super_admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// Whether this role holds the given permission.
    ///
    /// A role holds every permission whose minimum role sits at or below its
    /// own level.
    pub fn grants(&self, permission: Permission) -> bool {
        self.level() >= permission.required_role().level()
    }

    /// All roles from lowest to highest.
    pub fn all() -> [Role; 5] {
        [
            Role::Viewer,
            Role::Support,
            Role::Moderator,
            Role::Admin,
            Role::SuperAdmin,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the role ordering follows the hierarchy.
    ///
    /// Expected: each role's level is strictly greater than the previous one
    #[test]
    fn levels_are_strictly_increasing() {
        let levels: Vec<u8> = Role::all().iter().map(|r| r.level()).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4]);
        assert!(Role::Viewer < Role::SuperAdmin);
    }

    /// Tests string round-tripping for every role.
    ///
    /// Expected: from_str(as_str()) returns the same role
    #[test]
    fn roles_round_trip_through_strings() {
        for role in Role::all() {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
    }

    /// Tests that unknown role strings are rejected.
    ///
    /// Expected: None for strings that are not part of the hierarchy
    #[test]
    fn unknown_role_strings_are_rejected() {
        assert_eq!(Role::from_str("root"), None);
        assert_eq!(Role::from_str(""), None);
        assert_eq!(Role::from_str("Admin"), None);
    }

    /// Tests that higher roles inherit lower role permissions.
    ///
    /// Expected: SuperAdmin grants everything Viewer grants
    #[test]
    fn higher_roles_inherit_lower_permissions() {
        assert!(Role::Viewer.grants(Permission::PlayerView));
        assert!(Role::SuperAdmin.grants(Permission::PlayerView));
        assert!(Role::Moderator.grants(Permission::PlayerWarn));
    }

    /// Tests that lower roles do not hold higher permissions.
    ///
    /// Expected: grants returns false below the permission's minimum role
    #[test]
    fn lower_roles_lack_higher_permissions() {
        assert!(!Role::Viewer.grants(Permission::PlayerWarn));
        assert!(!Role::Support.grants(Permission::PlayerBan));
        assert!(!Role::Moderator.grants(Permission::CardManage));
        assert!(!Role::Admin.grants(Permission::AdminManage));
    }

    /// Tests serde serialization matches the storage representation.
    ///
    /// Expected: snake_case strings identical to as_str
    #[test]
    fn serde_matches_storage_representation() {
        for role in Role::all() {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
