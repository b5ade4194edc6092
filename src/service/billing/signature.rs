//! Stripe webhook signature verification.
//!
//! Stripe signs each delivery with `Stripe-Signature: t=<unix>,v1=<hex>`
//! where the hex is HMAC-SHA256 over `"{t}.{body}"` keyed by the endpoint
//! secret. Verification here checks the digest in constant time and rejects
//! timestamps older than the tolerance window, which bounds replay.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::webhook::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed timestamp, matching Stripe's default.
const TOLERANCE_SECONDS: i64 = 300;

/// Verifies a `Stripe-Signature` header against the raw request body.
///
/// A header may carry several `v1` signatures during secret rotation; the
/// delivery is accepted if any of them matches.
///
/// # Arguments
/// - `secret` - Endpoint signing secret (`whsec_...`)
/// - `header` - Raw `Stripe-Signature` header value
/// - `body` - Raw request body, exactly as received
///
/// # Returns
/// - `Ok(())` - Signature valid and timestamp fresh
/// - `Err(WebhookError::MalformedSignature)` - Header missing `t=` or `v1=`
/// - `Err(WebhookError::StaleTimestamp)` - Timestamp outside tolerance
/// - `Err(WebhookError::SignatureMismatch)` - No `v1` digest matched
pub fn verify_signature(secret: &str, header: &str, body: &str) -> Result<(), WebhookError> {
    let mut timestamp: Option<i64> = None;
    let mut signatures: Vec<Vec<u8>> = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => {
                if let Ok(bytes) = hex::decode(value) {
                    signatures.push(bytes);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(WebhookError::MalformedSignature)?;
    if signatures.is_empty() {
        return Err(WebhookError::MalformedSignature);
    }

    let age = Utc::now().timestamp() - timestamp;
    if age.abs() > TOLERANCE_SECONDS {
        return Err(WebhookError::StaleTimestamp(age));
    }

    let signed_payload = format!("{}.{}", timestamp, body);

    for signature in &signatures {
        // verify_slice compares in constant time
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| WebhookError::SignatureMismatch)?;
        mac.update(signed_payload.as_bytes());

        if mac.verify_slice(signature).is_ok() {
            return Ok(());
        }
    }

    Err(WebhookError::SignatureMismatch)
}
