//! One-time setup codes for first-admin bootstrap.
//!
//! A fresh deployment has no admin account and therefore no way to log in.
//! At startup, when the admin table has no active row, a random code is
//! generated, held in memory with a 60-second TTL, and written to the log.
//! `POST /v1/admin/auth/bootstrap` consumes it to create the first super
//! admin. The code is single-use and is never persisted.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 60;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// In-memory store for the one-time bootstrap code.
///
/// Cloning shares the underlying slot, so the instance held in `AppState`
/// and the one used during startup see the same code.
#[derive(Clone)]
pub struct SetupCodeService {
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    /// Creates a new service with no active code.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random code and stores it with the 60-second TTL.
    ///
    /// Any previously generated code is replaced.
    ///
    /// # Returns
    /// - `String` - The generated 32-character code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(SetupCode::new(code_string.clone()));
        code_string
    }

    /// Validates the provided code and consumes it on success.
    ///
    /// A matching, unexpired code is invalidated so it cannot be replayed.
    /// Expired codes are cleared as a side effect.
    ///
    /// # Arguments
    /// - `input_code` - Code supplied by the bootstrap request
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, expired code, or mismatch
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored) = code.as_ref() {
            if stored.is_expired() {
                *code = None;
                return false;
            }

            if stored.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks whether a valid, unexpired code is stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored) = code.as_ref() {
            if stored.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests generating a new setup code.
    ///
    /// Expected: 32-character code stored as valid
    #[tokio::test]
    async fn generates_code() {
        let service = SetupCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(service.has_valid_code().await);
    }

    /// Tests validating the correct code.
    ///
    /// Expected: validation succeeds and the code is consumed
    #[tokio::test]
    async fn correct_code_validates_once() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
        assert!(!service.validate_and_consume(&code).await);
    }

    /// Tests that a wrong code is rejected without consuming the stored one.
    ///
    /// Expected: validation fails and the stored code survives
    #[tokio::test]
    async fn wrong_code_is_rejected() {
        let service = SetupCodeService::new();
        service.generate().await;

        assert!(!service.validate_and_consume("wrong-code").await);
        assert!(service.has_valid_code().await);
    }

    /// Tests validating when no code exists.
    ///
    /// Expected: validation fails
    #[tokio::test]
    async fn no_code_means_no_validation() {
        let service = SetupCodeService::new();
        assert!(!service.validate_and_consume("anything").await);
    }

    /// Tests that regenerating replaces the previous code.
    ///
    /// Expected: old code fails, new code succeeds
    #[tokio::test]
    async fn regenerating_replaces_previous_code() {
        let service = SetupCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }
}
