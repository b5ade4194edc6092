use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 8 * 60 * 60;
const DEFAULT_ASSET_DIR: &str = "./assets";
const DEFAULT_PUBLIC_ASSET_URL: &str = "/assets";

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub token_ttl_seconds: i64,

    pub stripe_webhook_secret: String,

    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub comfyui_url: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_api_url: String,

    pub asset_dir: String,
    /// Base URL under which files in `asset_dir` are served.
    pub public_asset_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_seconds: std::env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS),
            stripe_webhook_secret: std::env::var("STRIPE_WEBHOOK_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("STRIPE_WEBHOOK_SECRET".to_string()))?,
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or_else(|_| ANTHROPIC_API_URL.to_string()),
            comfyui_url: std::env::var("COMFYUI_URL").ok(),
            elevenlabs_api_key: std::env::var("ELEVENLABS_API_KEY").ok(),
            elevenlabs_api_url: std::env::var("ELEVENLABS_API_URL")
                .unwrap_or_else(|_| ELEVENLABS_API_URL.to_string()),
            asset_dir: std::env::var("ASSET_DIR").unwrap_or_else(|_| DEFAULT_ASSET_DIR.to_string()),
            public_asset_url: std::env::var("PUBLIC_ASSET_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_ASSET_URL.to_string()),
        })
    }
}
