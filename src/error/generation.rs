use thiserror::Error;

/// Failures inside the background arena generation pipeline.
///
/// These never surface as HTTP responses. The pipeline records the failing
/// step and `Display` output of the error on the generation job row, then
/// stops without rolling back artifacts from completed steps.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A step needed an external service whose API key is not configured.
    ///
    /// # Fields
    /// - Name of the missing configuration value
    #[error("Missing configuration for generation step: {0}")]
    MissingConfig(&'static str),

    /// An external service answered with a non-success status or unusable body.
    ///
    /// # Fields
    /// - `service` - Which service failed (anthropic, comfyui, elevenlabs)
    /// - `detail` - Status code or parse failure description
    #[error("{service} request failed: {detail}")]
    Api { service: &'static str, detail: String },

    /// Polling for an async job result exceeded the attempt cap.
    ///
    /// # Fields
    /// - Identifier of the job that never finished
    #[error("Timed out waiting for remote job {0}")]
    Timeout(String),

    /// HTTP transport error talking to an external service.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Database error while persisting step progress or final rows.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error writing a generated asset under the asset directory.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed JSON from an external service response.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}
