use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum WebhookError {
    /// The `Stripe-Signature` header was absent.
    #[error("Missing Stripe-Signature header")]
    MissingSignature,

    /// The `Stripe-Signature` header did not contain `t=` and `v1=` parts.
    #[error("Malformed Stripe-Signature header")]
    MalformedSignature,

    /// The HMAC digest did not match any `v1` signature in the header.
    #[error("Stripe signature verification failed")]
    SignatureMismatch,

    /// The signed timestamp fell outside the accepted tolerance window.
    ///
    /// # Fields
    /// - Age of the signature in seconds
    #[error("Stripe signature timestamp outside tolerance ({0}s old)")]
    StaleTimestamp(i64),

    /// The event body was not valid JSON or was missing required fields.
    ///
    /// # Fields
    /// - Description of what failed to parse
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(String),
}

/// Converts webhook errors into HTTP responses.
///
/// All variants map to 400 Bad Request. The exact failure is logged at warn
/// level; the response body stays generic so signature internals are not
/// disclosed to the caller.
impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected webhook delivery: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Invalid webhook request".to_string(),
            }),
        )
            .into_response()
    }
}
