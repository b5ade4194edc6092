//! Automatic RBAC enforcement for the `/v1/admin` subtree.
//!
//! Mounted with `axum::middleware::from_fn_with_state` on the admin router.
//! Every request is resolved against the static route policy table before
//! its handler runs: public routes pass through, everything else must carry
//! a valid bearer token, and permission-gated routes additionally need the
//! admin's role to grant the resolved permission. On success the admin is
//! recorded in request extensions as `CurrentAdmin`.

use axum::{extract::State, middleware::Next, response::Response};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    rbac::{route_policy, Access},
    state::AppState,
};

/// Enforces the route policy table for one request.
///
/// # Arguments
/// - `state` - Application state with the database and token service
/// - `request` - Incoming request; gains a `CurrentAdmin` extension when
///   authentication runs
/// - `next` - Rest of the middleware stack
///
/// # Returns
/// - `Ok(Response)` - Policy satisfied, handler response
/// - `Err(AppError)` - 401/403 from the auth guard
pub async fn enforce(
    State(state): State<AppState>,
    mut request: axum::extract::Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = route_policy(request.method().as_str(), request.uri().path());

    let permissions = match policy {
        Access::Public => return Ok(next.run(request).await),
        Access::Authenticated => vec![],
        Access::Permission(permission) => vec![permission],
    };

    let guard = AuthGuard::new(&state.db, &state.tokens);
    let current = guard.require(request.headers(), &permissions).await?;

    request.extensions_mut().insert(current);

    Ok(next.run(request).await)
}
