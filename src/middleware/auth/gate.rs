//! Auth gate middleware: resolve the request's `Identity` and put it in extensions.
//!
//! - Never rejects for credential reasons: no cookie, a bad/expired token or a deleted
//!   user all continue as `Identity::Anonymous`.
//! - An unreachable user store stops the request with 503 instead of silently
//!   downgrading to anonymous. A stored user that cannot be decoded is a 500.
//! - Role checks happen in the handler extractors (`AuthUser`, `AdminUser`, ...).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Install the gate on every route of `router`.
///
/// Example:
/// ```ignore
/// let v1 = middleware::auth::gate::apply(v1_routes, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn cannot take a State extractor, so pass it explicitly via from_fn_with_state
    router.layer(middleware::from_fn_with_state(state, identity_middleware))
}

async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = match state.gate.authenticate(req.headers()).await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::error!(error = %err, "identity resolution failed");
            return Err(err.into());
        }
    };

    // middleware -> extractor hand-off
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
