//! ComfyUI adapter.
//!
//! ComfyUI runs workflows asynchronously: `POST /prompt` queues one and
//! returns a prompt id, then `GET /history/{id}` eventually carries the
//! output filenames. The poll loop is sleep-paced with an attempt cap so a
//! wedged render cannot pin a generation job forever.

use serde_json::{json, Value};
use std::time::Duration;

use crate::{config::Config, error::generation::GenerationError};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_POLL_ATTEMPTS: u32 = 60;

pub struct ComfyUiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ComfyUiClient {
    /// Builds the client from configuration.
    ///
    /// # Returns
    /// - `Ok(ComfyUiClient)` - Ready to queue workflows
    /// - `Err(GenerationError::MissingConfig)` - No ComfyUI URL configured
    pub fn from_config(http: &reqwest::Client, config: &Config) -> Result<Self, GenerationError> {
        let base_url = config
            .comfyui_url
            .clone()
            .ok_or(GenerationError::MissingConfig("COMFYUI_URL"))?;

        Ok(Self {
            http: http.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Queues a workflow and waits for its first output file.
    ///
    /// # Arguments
    /// - `workflow` - Full workflow graph for `POST /prompt`
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the first output file, served from ComfyUI
    /// - `Err(GenerationError::Timeout)` - No output within the attempt cap
    /// - `Err(GenerationError::Api)` - Submit rejected or history unusable
    pub async fn generate(&self, workflow: Value) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(format!("{}/prompt", self.base_url))
            .json(&json!({ "prompt": workflow }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Api {
                service: "comfyui",
                detail: format!("submit returned status {}", response.status()),
            });
        }

        let body: Value = response.json().await?;
        let prompt_id = body
            .get("prompt_id")
            .and_then(Value::as_str)
            .ok_or(GenerationError::Api {
                service: "comfyui",
                detail: "submit response carried no prompt_id".to_string(),
            })?
            .to_string();

        for _ in 0..MAX_POLL_ATTEMPTS {
            tokio::time::sleep(POLL_INTERVAL).await;

            let history: Value = self
                .http
                .get(format!("{}/history/{}", self.base_url, prompt_id))
                .send()
                .await?
                .json()
                .await?;

            if let Some(filename) = first_output_filename(&history, &prompt_id) {
                return Ok(format!("{}/view?filename={}", self.base_url, filename));
            }
        }

        Err(GenerationError::Timeout(prompt_id))
    }
}

/// Digs the first output filename out of a history document.
///
/// History is keyed by prompt id; outputs are keyed by node id and carry
/// arrays under media-type keys (`images`, `gifs`, `videos`). The first
/// entry with a `filename` wins.
fn first_output_filename(history: &Value, prompt_id: &str) -> Option<String> {
    let outputs = history.get(prompt_id)?.get("outputs")?.as_object()?;

    for node_output in outputs.values() {
        let Some(media) = node_output.as_object() else {
            continue;
        };

        for entries in media.values() {
            let Some(entries) = entries.as_array() else {
                continue;
            };

            if let Some(filename) = entries
                .iter()
                .filter_map(|e| e.get("filename"))
                .filter_map(Value::as_str)
                .next()
            {
                return Some(filename.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests filename extraction from a completed history document.
    ///
    /// Expected: first filename under any node's media array
    #[test]
    fn extracts_first_output_filename() {
        let history = json!({
            "p1": {
                "outputs": {
                    "9": { "images": [{ "filename": "arena_bg_00001.png", "type": "output" }] }
                }
            }
        });

        assert_eq!(
            first_output_filename(&history, "p1").as_deref(),
            Some("arena_bg_00001.png")
        );
    }

    /// Tests that an in-flight history document yields nothing.
    ///
    /// Expected: None while outputs are absent
    #[test]
    fn pending_history_yields_none() {
        assert_eq!(first_output_filename(&json!({}), "p1"), None);
        assert_eq!(
            first_output_filename(&json!({ "p1": { "outputs": {} } }), "p1"),
            None
        );
    }
}
