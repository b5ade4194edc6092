mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod rbac;
mod router;
mod service;
mod startup;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config, error::AppError, service::auth::code::SetupCodeService, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckport_admin=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let setup_code_service = SetupCodeService::new();

    tracing::info!("Starting server");

    // Generate a one-time bootstrap code if no admin account exists yet
    startup::check_for_admin(&db, &setup_code_service).await?;

    let state = AppState::new(db, http_client, setup_code_service, config);

    startup::serve(state).await?;

    Ok(())
}
