use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123".to_string(),
        issuer: "portfolio_site_test".to_string(),
        access_token_expiry: 3600,
    }))
}

/// `Authorization` header value for `admin_id`.
pub fn bearer(tokens: &Arc<dyn TokenProvider + Send + Sync>, admin_id: Uuid) -> String {
    let token = tokens
        .generate_access_token(admin_id)
        .expect("test token should encode");
    format!("Bearer {token}")
}
