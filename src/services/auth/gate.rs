//! Request authentication gate.
//!
//! cookie → verify → look up → `Identity`. Every credential problem ends in
//! `Identity::Anonymous`. An unreachable user store and a stored user we cannot read
//! are reported as errors; neither is something the client did.
//! Whether a route needs a particular role is decided downstream.

use axum::http::HeaderMap;
use thiserror::Error;
use uuid::Uuid;

use crate::services::auth::credential::extract_credential;
use crate::services::auth::identity::Identity;
use crate::services::auth::resolver::{IdentityResolver, ResolveError, StoreUnavailable};
use crate::services::auth::verifier::TokenVerifier;

#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    StoreUnavailable(#[from] StoreUnavailable),
    #[error("stored user {user_id} could not be read: {reason}")]
    UnreadableRecord { user_id: Uuid, reason: String },
}

impl From<ResolveError> for GateError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Unavailable(e) => Self::StoreUnavailable(e),
            ResolveError::UnreadableRecord { user_id, reason } => {
                Self::UnreadableRecord { user_id, reason }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    cookie_name: String,
    verifier: TokenVerifier,
    resolver: IdentityResolver,
}

impl AuthGate {
    pub fn new(
        cookie_name: impl Into<String>,
        verifier: TokenVerifier,
        resolver: IdentityResolver,
    ) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            verifier,
            resolver,
        }
    }

    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, GateError> {
        let Some(credential) = extract_credential(headers, &self.cookie_name) else {
            tracing::debug!("no auth cookie, continuing as anonymous");
            return Ok(Identity::Anonymous);
        };

        let claim = match self.verifier.verify(&credential) {
            Ok(claim) => claim,
            Err(err) => {
                tracing::warn!(error = %err, "auth token verification failed, continuing as anonymous");
                return Ok(Identity::Anonymous);
            }
        };

        match self.resolver.resolve(&claim).await? {
            Some(user) => {
                tracing::debug!(user_id = %user.id, role = %user.role, "request authenticated");
                Ok(Identity::Authenticated(user))
            }
            None => {
                tracing::info!(
                    user_id = %claim.user_id(),
                    "token subject no longer exists, continuing as anonymous"
                );
                Ok(Identity::Anonymous)
            }
        }
    }
}
