use sea_orm::DatabaseConnection;

use crate::{
    config::Config, data::admin::AdminRepository, error::AppError, router,
    service::auth::code::SetupCodeService, state::AppState,
};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool to the Postgres database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client for external API calls.
///
/// Redirects are disabled so a compromised upstream cannot bounce requests
/// to internal addresses.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Checks whether any active admin account exists and opens bootstrap if not.
///
/// On a fresh deployment there is no way to log in, so when no active admin
/// row is found a one-time setup code is generated and written to the log.
/// The code is consumed by `POST /v1/admin/auth/bootstrap` to create the
/// first super admin and expires after sixty seconds.
///
/// # Arguments
/// - `db` - Database connection
/// - `setup_code_service` - In-memory store for the one-time code
///
/// # Returns
/// - `Ok(())` - Check completed (code generated if needed)
/// - `Err(AppError)` - Database error during the admin count
pub async fn check_for_admin(
    db: &DatabaseConnection,
    setup_code_service: &SetupCodeService,
) -> Result<(), AppError> {
    let repo = AdminRepository::new(db);

    if repo.active_exists().await? {
        return Ok(());
    }

    let code = setup_code_service.generate().await;

    tracing::warn!(
        "No active admin account found. Bootstrap one within 60 seconds using setup code: {}",
        code
    );

    Ok(())
}

/// Binds the listener and serves the application router.
///
/// Blocks until the server shuts down.
///
/// # Arguments
/// - `state` - Fully initialized application state
///
/// # Returns
/// - `Ok(())` - Server exited cleanly
/// - `Err(AppError)` - Failed to bind the address or a fatal serve error
pub async fn serve(state: AppState) -> Result<(), AppError> {
    let bind_addr = state.config.bind_addr.clone();
    let app = router::router(&state).with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
