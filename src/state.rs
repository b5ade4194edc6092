//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external generation APIs (Anthropic, ComfyUI, ElevenLabs)
//! - Setup code service for first-admin bootstrap
//! - Application configuration (token signing, webhook secrets, asset paths)

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    service::auth::{code::SetupCodeService, token::TokenService},
};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `SetupCodeService` uses `Arc` for shared state
/// - `Config` is a plain struct of strings cloned once per request
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the Postgres database.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used by the generation pipeline for Anthropic,
    /// ComfyUI, and ElevenLabs calls.
    pub http_client: reqwest::Client,

    /// Service for managing one-time setup codes.
    ///
    /// Used to generate and validate the short-lived code that allows the
    /// first super admin account to be created when none exist in the database.
    pub setup_code_service: SetupCodeService,

    /// Service for issuing and validating admin bearer tokens.
    ///
    /// Built once from the configured signing secret and TTL so request
    /// handlers and the enforcement middleware share the same keys.
    pub tokens: TokenService,

    /// Application configuration loaded from the environment.
    ///
    /// Carries token signing material, the Stripe webhook secret, external
    /// service endpoints, and the asset directory for generated files.
    pub config: Config,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `setup_code_service` - Service for managing setup codes
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        setup_code_service: SetupCodeService,
        config: Config,
    ) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_seconds);

        Self {
            db,
            http_client,
            setup_code_service,
            tokens,
            config,
        }
    }
}
