//! Static route policy table for the `/v1/admin` subtree.
//!
//! Every admin route declares its access requirement here rather than inside
//! the handler. The enforcement middleware resolves the policy for the raw
//! request path before the handler runs. Patterns use `{param}` segments that
//! match exactly one non-empty path segment. Lookup walks the table in
//! declaration order and the first matching entry wins, so literal segments
//! that overlap a `{param}` position (such as `arenas/generate` next to
//! `arenas/{id}`) must be declared first.

use crate::rbac::Permission;

/// Access requirement attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token required. Used for login and bootstrap, which live under the
    /// admin prefix but must be reachable before any credentials exist.
    Public,
    /// A valid token for an active admin is required, but no particular
    /// permission beyond that.
    Authenticated,
    /// A valid token whose role grants the permission is required.
    Permission(Permission),
}

struct RoutePolicy {
    method: &'static str,
    pattern: &'static str,
    access: Access,
}

const fn policy(method: &'static str, pattern: &'static str, access: Access) -> RoutePolicy {
    RoutePolicy {
        method,
        pattern,
        access,
    }
}

use Access::{Authenticated, Public};
use Permission::*;

static ROUTES: &[RoutePolicy] = &[
    // Auth
    policy("POST", "/v1/admin/auth/login", Public),
    policy("POST", "/v1/admin/auth/bootstrap", Public),
    policy("GET", "/v1/admin/auth/me", Authenticated),
    // Player moderation
    policy("GET", "/v1/admin/players", Access::Permission(PlayerView)),
    policy("GET", "/v1/admin/players/{id}", Access::Permission(PlayerView)),
    policy("POST", "/v1/admin/players/{id}/warn", Access::Permission(PlayerWarn)),
    policy("POST", "/v1/admin/players/{id}/ban", Access::Permission(PlayerBan)),
    policy("POST", "/v1/admin/players/{id}/unban", Access::Permission(PlayerBan)),
    // Card catalog
    policy("GET", "/v1/admin/cards", Access::Permission(CardView)),
    policy("POST", "/v1/admin/cards", Access::Permission(CardManage)),
    policy("GET", "/v1/admin/cards/{id}", Access::Permission(CardView)),
    policy("PUT", "/v1/admin/cards/{id}", Access::Permission(CardManage)),
    policy("DELETE", "/v1/admin/cards/{id}", Access::Permission(CardManage)),
    policy("POST", "/v1/admin/cards/{id}/publish", Access::Permission(CardPublish)),
    policy("POST", "/v1/admin/cards/{id}/unpublish", Access::Permission(CardPublish)),
    // NFC instances
    policy("GET", "/v1/admin/cards/{id}/instances", Access::Permission(NfcManage)),
    policy("POST", "/v1/admin/cards/{id}/instances", Access::Permission(NfcManage)),
    policy("POST", "/v1/admin/nfc/activate", Access::Permission(NfcManage)),
    policy("POST", "/v1/admin/nfc/{id}/revoke", Access::Permission(NfcManage)),
    // Arenas; literal segments before the {id} patterns
    policy("POST", "/v1/admin/arenas/generate", Access::Permission(ArenaGenerate)),
    policy("GET", "/v1/admin/arenas/jobs", Access::Permission(ArenaView)),
    policy("GET", "/v1/admin/arenas/jobs/{id}", Access::Permission(ArenaView)),
    policy("GET", "/v1/admin/arenas", Access::Permission(ArenaView)),
    policy("POST", "/v1/admin/arenas", Access::Permission(ArenaManage)),
    policy("GET", "/v1/admin/arenas/{id}", Access::Permission(ArenaView)),
    policy("PUT", "/v1/admin/arenas/{id}", Access::Permission(ArenaManage)),
    policy("DELETE", "/v1/admin/arenas/{id}", Access::Permission(ArenaManage)),
    policy("POST", "/v1/admin/arenas/{id}/activate", Access::Permission(ArenaManage)),
    // CMS
    policy("GET", "/v1/admin/cms/announcements", Access::Permission(CmsManage)),
    policy("POST", "/v1/admin/cms/announcements", Access::Permission(CmsManage)),
    policy("PUT", "/v1/admin/cms/announcements/{id}", Access::Permission(CmsManage)),
    policy("DELETE", "/v1/admin/cms/announcements/{id}", Access::Permission(CmsManage)),
    policy("POST", "/v1/admin/cms/announcements/{id}/publish", Access::Permission(CmsPublish)),
    policy("POST", "/v1/admin/cms/announcements/{id}/unpublish", Access::Permission(CmsPublish)),
    policy("GET", "/v1/admin/cms/articles", Access::Permission(CmsManage)),
    policy("POST", "/v1/admin/cms/articles", Access::Permission(CmsManage)),
    policy("PUT", "/v1/admin/cms/articles/{id}", Access::Permission(CmsManage)),
    policy("DELETE", "/v1/admin/cms/articles/{id}", Access::Permission(CmsManage)),
    policy("POST", "/v1/admin/cms/articles/{id}/publish", Access::Permission(CmsPublish)),
    policy("POST", "/v1/admin/cms/articles/{id}/unpublish", Access::Permission(CmsPublish)),
    policy("GET", "/v1/admin/cms/videos", Access::Permission(CmsManage)),
    policy("POST", "/v1/admin/cms/videos", Access::Permission(CmsManage)),
    policy("PUT", "/v1/admin/cms/videos/{id}", Access::Permission(CmsManage)),
    policy("DELETE", "/v1/admin/cms/videos/{id}", Access::Permission(CmsManage)),
    policy("POST", "/v1/admin/cms/videos/{id}/publish", Access::Permission(CmsPublish)),
    policy("POST", "/v1/admin/cms/videos/{id}/unpublish", Access::Permission(CmsPublish)),
    // Billing
    policy("GET", "/v1/admin/billing/orders", Access::Permission(BillingView)),
    policy("GET", "/v1/admin/billing/summary", Access::Permission(BillingView)),
    // Analytics and audit
    policy("GET", "/v1/admin/analytics/dashboard", Access::Permission(AnalyticsView)),
    policy("GET", "/v1/admin/audit", Access::Permission(AuditView)),
    // Admin management
    policy("GET", "/v1/admin/admins", Access::Permission(AdminManage)),
    policy("POST", "/v1/admin/admins", Access::Permission(AdminManage)),
    policy("PUT", "/v1/admin/admins/{id}/role", Access::Permission(AdminManage)),
    policy("POST", "/v1/admin/admins/{id}/activate", Access::Permission(AdminManage)),
    policy("POST", "/v1/admin/admins/{id}/deactivate", Access::Permission(AdminManage)),
    policy("POST", "/v1/admin/admins/{id}/password", Access::Permission(AdminManage)),
];

/// Resolves the access requirement for a request.
///
/// Walks the policy table in declaration order and returns the first entry
/// whose method and pattern match. Unmatched paths under `/v1/admin` require
/// `SystemAdmin` so that a route missing from the table is locked rather
/// than open. Paths outside the admin prefix resolve to `Public`; those are
/// mounted outside the enforcement middleware and never consult this table
/// in production.
///
/// # Arguments
/// - `method` - HTTP method of the request ("GET", "POST", ...)
/// - `path` - Raw request path without the query string
///
/// # Returns
/// - `Access` - Requirement the middleware must enforce
pub fn route_policy(method: &str, path: &str) -> Access {
    for route in ROUTES {
        if route.method == method && pattern_matches(route.pattern, path) {
            return route.access;
        }
    }

    if path == "/v1/admin" || path.starts_with("/v1/admin/") {
        return Access::Permission(Permission::SystemAdmin);
    }

    Access::Public
}

/// Matches a path against a pattern segment by segment.
///
/// A `{param}` segment matches exactly one non-empty path segment. Every
/// other segment must match literally, and both sides must have the same
/// number of segments.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if expected.starts_with('{') && expected.ends_with('}') {
                    if actual.is_empty() {
                        return false;
                    }
                } else if expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::Role;

    /// Tests literal route lookup.
    ///
    /// Expected: exact method and path pairs resolve to their table entry
    #[test]
    fn resolves_literal_routes() {
        assert_eq!(
            route_policy("GET", "/v1/admin/players"),
            Access::Permission(Permission::PlayerView)
        );
        assert_eq!(
            route_policy("GET", "/v1/admin/analytics/dashboard"),
            Access::Permission(Permission::AnalyticsView)
        );
        assert_eq!(route_policy("POST", "/v1/admin/auth/login"), Access::Public);
        assert_eq!(
            route_policy("GET", "/v1/admin/auth/me"),
            Access::Authenticated
        );
    }

    /// Tests that `{param}` segments match dynamic values.
    ///
    /// Expected: numeric and non-numeric ids both match one segment
    #[test]
    fn param_segments_match_one_segment() {
        assert_eq!(
            route_policy("POST", "/v1/admin/players/42/ban"),
            Access::Permission(Permission::PlayerBan)
        );
        assert_eq!(
            route_policy("GET", "/v1/admin/cards/123/instances"),
            Access::Permission(Permission::NfcManage)
        );
        // A param never spans two segments
        assert_eq!(
            route_policy("POST", "/v1/admin/players/42/extra/ban"),
            Access::Permission(Permission::SystemAdmin)
        );
    }

    /// Tests method discrimination on the same path.
    ///
    /// Expected: GET and POST on /v1/admin/cards resolve differently
    #[test]
    fn same_path_different_methods() {
        assert_eq!(
            route_policy("GET", "/v1/admin/cards"),
            Access::Permission(Permission::CardView)
        );
        assert_eq!(
            route_policy("POST", "/v1/admin/cards"),
            Access::Permission(Permission::CardManage)
        );
    }

    /// Tests that literal segments win over `{param}` entries.
    ///
    /// Expected: arenas/generate and arenas/jobs do not fall into arenas/{id}
    #[test]
    fn literal_segments_take_priority() {
        assert_eq!(
            route_policy("POST", "/v1/admin/arenas/generate"),
            Access::Permission(Permission::ArenaGenerate)
        );
        assert_eq!(
            route_policy("GET", "/v1/admin/arenas/jobs"),
            Access::Permission(Permission::ArenaView)
        );
        assert_eq!(
            route_policy("GET", "/v1/admin/arenas/7"),
            Access::Permission(Permission::ArenaView)
        );
    }

    /// Tests default-deny for unmatched admin paths.
    ///
    /// Expected: anything under /v1/admin without a table entry requires
    /// SystemAdmin, including wrong-method hits on known paths
    #[test]
    fn unmatched_admin_paths_require_system_admin() {
        assert_eq!(
            route_policy("GET", "/v1/admin/unknown"),
            Access::Permission(Permission::SystemAdmin)
        );
        assert_eq!(
            route_policy("DELETE", "/v1/admin/players"),
            Access::Permission(Permission::SystemAdmin)
        );
        assert_eq!(
            route_policy("GET", "/v1/admin"),
            Access::Permission(Permission::SystemAdmin)
        );
    }

    /// Tests that trailing slashes do not match parameterized entries.
    ///
    /// Expected: an empty trailing segment is not a valid {id}
    #[test]
    fn trailing_slash_does_not_match_param() {
        assert_eq!(
            route_policy("GET", "/v1/admin/players/"),
            Access::Permission(Permission::SystemAdmin)
        );
    }

    /// Tests paths outside the admin prefix.
    ///
    /// Expected: Public, since those routes are mounted outside the guard
    #[test]
    fn non_admin_paths_resolve_public() {
        assert_eq!(route_policy("GET", "/v1/health"), Access::Public);
        assert_eq!(route_policy("GET", "/v1/catalog/cards"), Access::Public);
    }

    /// Tests that only SuperAdmin satisfies the default-deny policy.
    ///
    /// Expected: Admin role does not grant SystemAdmin
    #[test]
    fn default_deny_needs_super_admin() {
        let Access::Permission(permission) = route_policy("GET", "/v1/admin/debug") else {
            panic!("expected a permission requirement");
        };
        assert!(!Role::Admin.grants(permission));
        assert!(Role::SuperAdmin.grants(permission));
    }
}
