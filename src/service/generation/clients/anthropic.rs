//! Anthropic messages API adapter.

use serde_json::{json, Value};

use crate::{config::Config, error::generation::GenerationError};

const MODEL: &str = "claude-3-5-sonnet-latest";
const MAX_TOKENS: u32 = 1024;
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl AnthropicClient {
    /// Builds the client from configuration.
    ///
    /// # Returns
    /// - `Ok(AnthropicClient)` - Ready to issue completions
    /// - `Err(GenerationError::MissingConfig)` - No API key configured
    pub fn from_config(http: &reqwest::Client, config: &Config) -> Result<Self, GenerationError> {
        let api_key = config
            .anthropic_api_key
            .clone()
            .ok_or(GenerationError::MissingConfig("ANTHROPIC_API_KEY"))?;

        Ok(Self {
            http: http.clone(),
            api_url: config.anthropic_api_url.clone(),
            api_key,
        })
    }

    /// Sends one user prompt and returns the model's text reply.
    ///
    /// # Arguments
    /// - `prompt` - Full prompt text for a single-turn exchange
    ///
    /// # Returns
    /// - `Ok(String)` - Text of the first content block
    /// - `Err(GenerationError::Api)` - Non-success status or missing text
    pub async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&json!({
                "model": MODEL,
                "max_tokens": MAX_TOKENS,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Api {
                service: "anthropic",
                detail: format!("status {}", response.status()),
            });
        }

        let body: Value = response.json().await?;

        body.pointer("/content/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(GenerationError::Api {
                service: "anthropic",
                detail: "response carried no text content".to_string(),
            })
    }
}
