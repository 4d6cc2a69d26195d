//! User store interface consumed by the auth gate and the auth endpoints.
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::repos::error::RepoError;

/// Account role. Ordered so that `SuperAdmin > Admin > Member`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Member,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
            Role::SuperAdmin => "super-admin",
        }
    }

    /// True when this role grants at least the privileges of `required`.
    pub fn at_least(self, required: Role) -> bool {
        self >= required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    // Accepts `super-admin`, `super_admin` and `SUPER_ADMIN` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            "super-admin" => Ok(Role::SuperAdmin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// A persisted account as the gate sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Login-only view: the record plus its password hash.
///
/// The hash never leaves the login handler.
#[derive(Clone)]
pub struct UserCredentials {
    pub user: UserRecord,
    pub password_hash: String,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Persisted user store.
///
/// Every method is one round-trip to the backend; nothing is cached here.
/// A missing user is `Ok(None)`, never an `Err`. `RepoError::Db` means the backend
/// could not answer; `RepoError::InvalidRow` means it answered with a row we cannot read.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    // Backend name for logs.
    fn backend_name(&self) -> &'static str;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepoError>;

    // `email` is expected to be normalized (trimmed, lowercase).
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, RepoError>;

    async fn list(&self) -> Result<Vec<UserRecord>, RepoError>;
}
