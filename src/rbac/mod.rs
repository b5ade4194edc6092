//! Role-based access control for the admin API.
//!
//! Access control is driven by three pieces that live in this module:
//!
//! - **Roles** (`role`) - A fixed five-level hierarchy from `Viewer` up to
//!   `SuperAdmin`. Each level inherits every permission of the levels below it.
//! - **Permissions** (`permission`) - Granular verbs such as `PlayerBan` or
//!   `CardPublish`. Each permission declares the minimum role that holds it.
//! - **Route policies** (`routes`) - A static table mapping `(method, path
//!   pattern)` pairs on the `/v1/admin` subtree to an access requirement. The
//!   enforcement middleware consults this table on every admin request, so
//!   handlers do not repeat permission checks for their own route.
//!
//! Paths not present in the table but still under `/v1/admin` require
//! `SystemAdmin`. A forgotten table entry therefore locks a route down
//! instead of exposing it.

pub mod permission;
pub mod role;
pub mod routes;

pub use permission::Permission;
pub use role::Role;
pub use routes::{route_policy, Access};
