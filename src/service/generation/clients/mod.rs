//! Thin HTTP adapters for the external generation services.
//!
//! Each client wraps the shared `reqwest::Client` with the endpoint and
//! credentials for one service and exposes the single call shape the
//! pipeline needs. Construction fails fast with `MissingConfig` when the
//! service is not configured, so jobs die on the step that needed the key
//! rather than at startup.

pub mod anthropic;
pub mod comfyui;
pub mod elevenlabs;

pub use anthropic::AnthropicClient;
pub use comfyui::ComfyUiClient;
pub use elevenlabs::ElevenLabsClient;
