//! Bearer token issue and validation.
//!
//! Stateless HS256 access tokens. There is no revocation list; tokens are
//! short-lived and logout is a client-side discard. The role travels in the
//! claims but enforcement always re-reads the admin row, so a role change
//! takes effect on the next request rather than the next login.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::auth::AuthError;

/// Claims carried by an admin access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin id.
    pub sub: i32,
    pub email: String,
    /// Role string at issue time, informational only.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique token id.
    pub jti: String,
}

/// Issues and validates admin access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service from the shared secret and TTL.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret from configuration
    /// - `ttl_seconds` - Token lifetime
    ///
    /// # Returns
    /// - `TokenService` - Service ready to issue and validate
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    /// Issues a token for an admin.
    ///
    /// # Arguments
    /// - `admin_id` - Admin row id, becomes `sub`
    /// - `email` - Admin email
    /// - `role` - Role string at issue time
    ///
    /// # Returns
    /// - `Ok((token, expires_at))` - Signed token and its expiry
    /// - `Err(AuthError::InvalidToken)` - Signing failed
    pub fn issue(
        &self,
        admin_id: i32,
        email: &str,
        role: &str,
    ) -> Result<(String, DateTime<Utc>), AuthError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: admin_id,
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok((token, expires_at))
    }

    /// Validates a bearer token and returns its claims.
    ///
    /// Expired signatures, bad signatures, and garbage input all collapse to
    /// `InvalidToken`; the caller does not need to distinguish them.
    ///
    /// # Arguments
    /// - `token` - Raw token from the Authorization header
    ///
    /// # Returns
    /// - `Ok(Claims)` - Validated claims
    /// - `Err(AuthError::InvalidToken)` - Validation failed for any reason
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(data.claims)
    }

    /// Expiry of a set of claims as a timestamp.
    pub fn expiry(claims: &Claims) -> DateTime<Utc> {
        Utc.timestamp_opt(claims.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
