use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::repos::user_store::UserRecord;
use crate::services::auth::Identity;

/// Hands the gate's `Identity` to a handler. Never rejects on anonymous.
///
/// Missing extension means the route is not behind the gate, which is a wiring bug.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "route is not behind the auth gate");
                AppError::Internal
            })
    }
}

/// Any signed-in user. 401 for anonymous requests.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserRecord);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;

        identity.into_user().map(AuthUser).ok_or(AppError::Unauthorized)
    }
}
