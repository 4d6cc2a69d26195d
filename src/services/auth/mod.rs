pub mod credential;
pub mod factory;
pub mod gate;
pub mod identity;
pub mod issuer;
pub mod password;
pub mod resolver;
pub mod verifier;

pub use credential::{Credential, CookiePolicy, extract_credential};
pub use factory::{build_auth_gate, build_cookie_policy, build_token_issuer};
pub use gate::{AuthGate, GateError};
pub use identity::Identity;
pub use issuer::TokenIssuer;
pub use resolver::{IdentityResolver, ResolveError, StoreUnavailable};
pub use verifier::{IdentityClaim, TokenVerifier, VerificationError};
