use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    rbac::Permission,
    service::auth::token::TokenService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod auth_guard;

const TEST_SECRET: &str = "test-secret";

fn tokens() -> TokenService {
    TokenService::new(TEST_SECRET, 3600)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
