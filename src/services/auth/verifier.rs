use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::JwtSecret;
use crate::services::auth::credential::Credential;

// Errors returned by token verification. Any of these means "not authenticated".
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("token expired")]
    Expired,
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),
    #[error("invalid 'sub' (expected UUID)")]
    InvalidSubject,
}

impl From<jsonwebtoken::errors::Error> for VerificationError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed(e),
        }
    }
}

/// Wire claims of an auth token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Verified identity claim.
///
/// Only `TokenVerifier` hands these out, so holding one means the signature and
/// expiry were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaim {
    user_id: Uuid,
}

impl IdentityClaim {
    pub(crate) fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }
}

/// HS256 token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &JwtSecret, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Check signature + expiry, then lift `sub` into a typed claim.
    ///
    /// `jsonwebtoken::Validation` covers signature, algorithm, `exp` and the presence
    /// of `sub`; the UUID check on `sub` is ours.
    pub fn verify(&self, credential: &Credential) -> Result<IdentityClaim, VerificationError> {
        let data = jsonwebtoken::decode::<AccessTokenClaims>(
            credential.as_str(),
            &self.decoding_key,
            &self.validation,
        )?;

        let user_id =
            Uuid::parse_str(data.claims.sub.trim()).map_err(|_| VerificationError::InvalidSubject)?;

        Ok(IdentityClaim::new(user_id))
    }
}
