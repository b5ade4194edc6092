//! ElevenLabs text-to-speech adapter.
//!
//! Unlike the other services, the audio bytes come back in the response
//! body, so the client also owns writing the file under the asset directory
//! and returning the public URL for it.

use crate::{config::Config, error::generation::GenerationError};

const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
const MODEL_ID: &str = "eleven_multilingual_v2";

pub struct ElevenLabsClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    asset_dir: String,
    public_asset_url: String,
}

impl ElevenLabsClient {
    /// Builds the client from configuration.
    ///
    /// # Returns
    /// - `Ok(ElevenLabsClient)` - Ready to synthesize speech
    /// - `Err(GenerationError::MissingConfig)` - No API key configured
    pub fn from_config(http: &reqwest::Client, config: &Config) -> Result<Self, GenerationError> {
        let api_key = config
            .elevenlabs_api_key
            .clone()
            .ok_or(GenerationError::MissingConfig("ELEVENLABS_API_KEY"))?;

        Ok(Self {
            http: http.clone(),
            api_url: config.elevenlabs_api_url.trim_end_matches('/').to_string(),
            api_key,
            asset_dir: config.asset_dir.clone(),
            public_asset_url: config.public_asset_url.trim_end_matches('/').to_string(),
        })
    }

    /// Synthesizes a script and writes the audio under the asset directory.
    ///
    /// # Arguments
    /// - `script` - Text to read
    /// - `filename` - Target filename, unique per job
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL for the written file
    /// - `Err(GenerationError::Api)` - Non-success status from the API
    /// - `Err(GenerationError::IoErr)` - Could not write the audio file
    pub async fn synthesize(
        &self,
        script: &str,
        filename: &str,
    ) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(format!("{}/{}", self.api_url, DEFAULT_VOICE_ID))
            .header("xi-api-key", &self.api_key)
            .json(&serde_json::json!({
                "text": script,
                "model_id": MODEL_ID,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Api {
                service: "elevenlabs",
                detail: format!("status {}", response.status()),
            });
        }

        let audio = response.bytes().await?;

        tokio::fs::create_dir_all(&self.asset_dir).await?;
        tokio::fs::write(format!("{}/{}", self.asset_dir, filename), &audio).await?;

        Ok(format!("{}/{}", self.public_asset_url, filename))
    }
}
