use crate::rbac::Role;

/// Parameters for creating an admin account.
///
/// The password arrives at the service as plaintext and leaves it hashed;
/// repositories only ever see the hash.
#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    /// Login email, unique across all admins.
    pub email: String,
    /// Display name shown in the back office.
    pub username: String,
    /// Bcrypt hash of the initial password.
    pub password_hash: String,
    /// Role in the five-level hierarchy.
    pub role: Role,
}
