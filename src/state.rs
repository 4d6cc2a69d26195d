/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - users: the persisted user store, gate: auth gate, issuer/cookies: login side
 * - Cheap to clone (everything behind Arc / small owned values)
 */
use std::sync::Arc;

use crate::repos::user_store::UserStore;
use crate::services::auth::{AuthGate, CookiePolicy, TokenIssuer};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub gate: Arc<AuthGate>,
    pub issuer: Arc<TokenIssuer>,
    pub cookies: CookiePolicy,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        gate: Arc<AuthGate>,
        issuer: Arc<TokenIssuer>,
        cookies: CookiePolicy,
    ) -> Self {
        Self {
            users,
            gate,
            issuer,
            cookies,
        }
    }
}
