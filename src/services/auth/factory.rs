/// Factories: build the auth services from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::repos::user_store::UserStore;
use crate::services::auth::{
    AuthGate, CookiePolicy, IdentityResolver, TokenIssuer, TokenVerifier,
};

pub fn build_auth_gate(config: &Config, users: Arc<dyn UserStore>) -> Arc<AuthGate> {
    let verifier = TokenVerifier::new(&config.jwt_secret, config.access_token_leeway_seconds);
    let resolver = IdentityResolver::new(users, config.auth_store_timeout);

    Arc::new(AuthGate::new(
        config.auth_cookie_name.clone(),
        verifier,
        resolver,
    ))
}

pub fn build_token_issuer(config: &Config) -> Arc<TokenIssuer> {
    Arc::new(TokenIssuer::new(
        &config.jwt_secret,
        config.access_token_ttl_seconds,
    ))
}

pub fn build_cookie_policy(config: &Config) -> CookiePolicy {
    CookiePolicy {
        name: config.auth_cookie_name.clone(),
        secure: config.app_env.is_production(),
        max_age_seconds: config.access_token_ttl_seconds,
    }
}
