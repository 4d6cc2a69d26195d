/*
 * Responsibility
 * - v1 URL layout
 * - login / logout never read the request identity, so they sit outside the gate and keep
 *   working (and keep clearing cookies) while the user store is down
 * - every other v1 route is behind the gate; per-route access is decided by the handler extractors
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    admin::session,
    auth::{login, logout, me},
    users::{get_user, list_users},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let session_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let gated = Router::new()
        .route("/auth/me", get(me))
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/admin/session", get(session));

    session_routes.merge(middleware::auth::gate::apply(gated, state))
}
