use serde_json::Value;

use crate::error::webhook::WebhookError;

pub const ORDER_STATUS_PENDING: &str = "pending";
pub const ORDER_STATUS_PAID: &str = "paid";
pub const ORDER_STATUS_FAILED: &str = "failed";
pub const ORDER_STATUS_REFUNDED: &str = "refunded";

pub const EVENT_CHECKOUT_COMPLETED: &str = "checkout.session.completed";
pub const EVENT_PAYMENT_FAILED: &str = "payment_intent.payment_failed";
pub const EVENT_CHARGE_REFUNDED: &str = "charge.refunded";

/// A Stripe webhook event reduced to the fields the dispatcher needs.
///
/// The full payload is kept alongside and stored verbatim on the
/// `payment_event` row for later inspection.
#[derive(Debug, Clone)]
pub struct StripeEvent {
    /// Stripe event id (`evt_...`), the idempotency key.
    pub id: String,
    pub event_type: String,
    /// Checkout session the event refers to, when one can be resolved.
    pub session_id: Option<String>,
    pub payload: Value,
}

impl StripeEvent {
    /// Extracts the dispatch fields from a verified webhook payload.
    ///
    /// Checkout session events carry the session id as `data.object.id`.
    /// Payment intent and charge events do not reference the session
    /// directly, so those fall back to `data.object.metadata.session_id`,
    /// which the storefront sets when it creates the payment.
    ///
    /// # Arguments
    /// - `payload` - Parsed JSON body of the webhook request
    ///
    /// # Returns
    /// - `Ok(StripeEvent)` - Event with id and type present
    /// - `Err(WebhookError::MalformedPayload)` - Missing id or type
    pub fn from_payload(payload: Value) -> Result<Self, WebhookError> {
        let id = payload
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| WebhookError::MalformedPayload("missing event id".to_string()))?
            .to_string();

        let event_type = payload
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| WebhookError::MalformedPayload("missing event type".to_string()))?
            .to_string();

        let object = payload.pointer("/data/object");

        let session_id = if event_type.starts_with("checkout.session.") {
            object
                .and_then(|o| o.get("id"))
                .and_then(Value::as_str)
                .map(str::to_string)
        } else {
            object
                .and_then(|o| o.pointer("/metadata/session_id"))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Ok(Self {
            id,
            event_type,
            session_id,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests session id extraction from a checkout event.
    ///
    /// Expected: data.object.id is used as the session id
    #[test]
    fn checkout_event_uses_object_id() {
        let event = StripeEvent::from_payload(json!({
            "id": "evt_1",
            "type": "checkout.session.completed",
            "data": { "object": { "id": "cs_test_123" } }
        }))
        .unwrap();

        assert_eq!(event.id, "evt_1");
        assert_eq!(event.event_type, "checkout.session.completed");
        assert_eq!(event.session_id.as_deref(), Some("cs_test_123"));
    }

    /// Tests the metadata fallback for non-checkout events.
    ///
    /// Expected: data.object.metadata.session_id is used
    #[test]
    fn payment_event_uses_metadata_session() {
        let event = StripeEvent::from_payload(json!({
            "id": "evt_2",
            "type": "payment_intent.payment_failed",
            "data": { "object": { "id": "pi_9", "metadata": { "session_id": "cs_test_456" } } }
        }))
        .unwrap();

        assert_eq!(event.session_id.as_deref(), Some("cs_test_456"));
    }

    /// Tests that a session id is optional.
    ///
    /// Expected: Ok with session_id None when nothing resolvable
    #[test]
    fn missing_session_is_not_an_error() {
        let event = StripeEvent::from_payload(json!({
            "id": "evt_3",
            "type": "charge.refunded",
            "data": { "object": { "id": "ch_1" } }
        }))
        .unwrap();

        assert_eq!(event.session_id, None);
    }

    /// Tests rejection of payloads without an event id or type.
    ///
    /// Expected: MalformedPayload error
    #[test]
    fn missing_id_or_type_is_malformed() {
        assert!(StripeEvent::from_payload(json!({ "type": "x" })).is_err());
        assert!(StripeEvent::from_payload(json!({ "id": "evt_4" })).is_err());
    }
}
