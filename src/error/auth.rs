use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed validation.
    ///
    /// Covers expired tokens, bad signatures, and garbage input. The underlying
    /// reason is kept server-side. Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Login failed because the email or password did not match.
    ///
    /// Both cases produce the same response so the endpoint cannot be used to
    /// probe for registered email addresses. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The admin referenced by a valid token no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    ///
    /// # Fields
    /// - Admin ID from the token that was not found in the database
    #[error("Admin {0} from token not found in database")]
    AdminNotFound(i32),

    /// The admin account has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the deactivated admin
    #[error("Admin {0} account is deactivated")]
    AccountDisabled(i32),

    /// The admin is authenticated but lacks the required permission.
    ///
    /// Results in a 403 Forbidden response. The denied permission is logged
    /// for the audit trail but not echoed back to the client.
    ///
    /// # Fields
    /// - ID of the admin that was denied
    /// - Description of the denied permission or route
    #[error("Admin {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The one-time setup code was wrong, expired, or already used.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Setup code is invalid or expired")]
    InvalidSetupCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// messages. Token problems and bad credentials return 401 with deliberately
/// generic bodies, while permission and account-state failures return 403.
/// Denied permissions are logged at warn level for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - Missing/invalid tokens, bad credentials, bad setup codes
/// - 403 Forbidden - Deactivated accounts and denied permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::AdminNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidSetupCode => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Setup code is invalid or expired".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled(admin_id) => {
                tracing::warn!("Deactivated admin {} attempted a request", admin_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Account is deactivated".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(admin_id, detail) => {
                tracing::warn!("Admin {} denied access: {}", admin_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
