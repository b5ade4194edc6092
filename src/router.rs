//! Axum route configuration and API documentation.
//!
//! The public surface (health, catalog, CMS reads, the Stripe webhook) is
//! mounted directly. Everything under `/v1/admin` goes through the RBAC
//! enforcement middleware, which resolves each request against the static
//! route policy table before its handler runs; handlers past the guard read
//! the acting admin from the `CurrentAdmin` extension.

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        admins, analytics, arenas, audit, auth, billing, cards, catalog, cms, cms_admin, health,
        players,
    },
    middleware::rbac,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Deckport Admin API",
        description = "Back-office API for the Deckport trading card platform."
    ),
    paths(
        health::health,
        auth::login,
        auth::bootstrap,
        players::list,
        players::detail,
        catalog::list,
        catalog::get,
        arenas::generate,
        cms::live_announcements,
        cms::read_article,
        cms::watch_video,
        analytics::dashboard,
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `state` - Shared state; also cloned into the enforcement middleware
pub fn router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/v1/health", get(health::health))
        .route("/v1/catalog/cards", get(catalog::list))
        .route("/v1/catalog/cards/{slug}", get(catalog::get))
        .route("/v1/cms/announcements", get(cms::live_announcements))
        .route("/v1/cms/articles", get(cms::list_articles))
        .route("/v1/cms/articles/{slug}", get(cms::read_article))
        .route("/v1/cms/videos", get(cms::list_videos))
        .route("/v1/cms/videos/{id}", get(cms::watch_video))
        .route("/v1/billing/webhooks/stripe", post(billing::stripe_webhook));

    let admin = Router::new()
        // Auth
        .route("/v1/admin/auth/login", post(auth::login))
        .route("/v1/admin/auth/bootstrap", post(auth::bootstrap))
        .route("/v1/admin/auth/me", get(auth::me))
        // Player moderation
        .route("/v1/admin/players", get(players::list))
        .route("/v1/admin/players/{id}", get(players::detail))
        .route("/v1/admin/players/{id}/warn", post(players::warn))
        .route("/v1/admin/players/{id}/ban", post(players::ban))
        .route("/v1/admin/players/{id}/unban", post(players::unban))
        // Card catalog
        .route("/v1/admin/cards", get(cards::list).post(cards::create))
        .route(
            "/v1/admin/cards/{id}",
            get(cards::get).put(cards::update).delete(cards::delete),
        )
        .route("/v1/admin/cards/{id}/publish", post(cards::publish))
        .route("/v1/admin/cards/{id}/unpublish", post(cards::unpublish))
        .route(
            "/v1/admin/cards/{id}/instances",
            get(cards::list_instances).post(cards::provision_instances),
        )
        .route("/v1/admin/nfc/activate", post(cards::activate_instance))
        .route("/v1/admin/nfc/{id}/revoke", post(cards::revoke_instance))
        // Arenas and generation
        .route("/v1/admin/arenas/generate", post(arenas::generate))
        .route("/v1/admin/arenas/jobs", get(arenas::list_jobs))
        .route("/v1/admin/arenas/jobs/{id}", get(arenas::get_job))
        .route("/v1/admin/arenas", get(arenas::list).post(arenas::create))
        .route(
            "/v1/admin/arenas/{id}",
            get(arenas::get).put(arenas::update).delete(arenas::delete),
        )
        .route("/v1/admin/arenas/{id}/activate", post(arenas::activate))
        // CMS management
        .route(
            "/v1/admin/cms/announcements",
            get(cms_admin::list_announcements).post(cms_admin::create_announcement),
        )
        .route(
            "/v1/admin/cms/announcements/{id}",
            put(cms_admin::update_announcement).delete(cms_admin::delete_announcement),
        )
        .route(
            "/v1/admin/cms/announcements/{id}/publish",
            post(cms_admin::publish_announcement),
        )
        .route(
            "/v1/admin/cms/announcements/{id}/unpublish",
            post(cms_admin::unpublish_announcement),
        )
        .route(
            "/v1/admin/cms/articles",
            get(cms_admin::list_articles).post(cms_admin::create_article),
        )
        .route(
            "/v1/admin/cms/articles/{id}",
            put(cms_admin::update_article).delete(cms_admin::delete_article),
        )
        .route(
            "/v1/admin/cms/articles/{id}/publish",
            post(cms_admin::publish_article),
        )
        .route(
            "/v1/admin/cms/articles/{id}/unpublish",
            post(cms_admin::unpublish_article),
        )
        .route(
            "/v1/admin/cms/videos",
            get(cms_admin::list_videos).post(cms_admin::create_video),
        )
        .route(
            "/v1/admin/cms/videos/{id}",
            put(cms_admin::update_video).delete(cms_admin::delete_video),
        )
        .route(
            "/v1/admin/cms/videos/{id}/publish",
            post(cms_admin::publish_video),
        )
        .route(
            "/v1/admin/cms/videos/{id}/unpublish",
            post(cms_admin::unpublish_video),
        )
        // Billing
        .route("/v1/admin/billing/orders", get(billing::list_orders))
        .route("/v1/admin/billing/summary", get(billing::revenue_summary))
        // Analytics and audit
        .route("/v1/admin/analytics/dashboard", get(analytics::dashboard))
        .route("/v1/admin/audit", get(audit::list))
        // Admin management
        .route("/v1/admin/admins", get(admins::list).post(admins::create))
        .route("/v1/admin/admins/{id}/role", put(admins::set_role))
        .route("/v1/admin/admins/{id}/activate", post(admins::activate))
        .route("/v1/admin/admins/{id}/deactivate", post(admins::deactivate))
        .route("/v1/admin/admins/{id}/password", post(admins::reset_password))
        .layer(from_fn_with_state(state.clone(), rbac::enforce));

    Router::new()
        .merge(public)
        .merge(admin)
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
