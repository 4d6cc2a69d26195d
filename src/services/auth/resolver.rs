use std::{sync::Arc, time::Duration};

use thiserror::Error;
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::user_store::{UserRecord, UserStore};
use crate::services::auth::verifier::IdentityClaim;

/// The user store could not answer. Never produced for "user does not exist".
#[derive(Debug, Error)]
pub enum StoreUnavailable {
    #[error("user store query failed ({backend}): {source}")]
    Query {
        backend: &'static str,
        #[source]
        source: RepoError,
    },
    #[error("user store lookup timed out after {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Unavailable(#[from] StoreUnavailable),
    // The store answered, but with a row we cannot turn into a `UserRecord`.
    #[error("stored user {user_id} could not be read: {reason}")]
    UnreadableRecord { user_id: Uuid, reason: String },
}

/// Confirms a verified claim still maps to a live account.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn UserStore>,
    lookup_timeout: Duration,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("backend", &self.store.backend_name())
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn UserStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// One lookup per call, bounded by `lookup_timeout`.
    ///
    /// - `Ok(Some(_))`: the account exists (as of now)
    /// - `Ok(None)`: the account was deleted after the token was issued
    /// - `Err(Unavailable)`: the store is unreachable or too slow
    /// - `Err(UnreadableRecord)`: the row exists but is not a valid user
    pub async fn resolve(&self, claim: &IdentityClaim) -> Result<Option<UserRecord>, ResolveError> {
        let lookup = self.store.find_by_id(claim.user_id());

        match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(user)) => Ok(user),
            Ok(Err(RepoError::InvalidRow(reason))) => Err(ResolveError::UnreadableRecord {
                user_id: claim.user_id(),
                reason,
            }),
            Ok(Err(source)) => Err(StoreUnavailable::Query {
                backend: self.store.backend_name(),
                source,
            }
            .into()),
            Err(_) => Err(StoreUnavailable::TimedOut(self.lookup_timeout).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::repos::user_store::{Role, UserCredentials};

    enum Behavior {
        Returns(Option<UserRecord>),
        Fails,
        BadRow,
        Hangs,
    }

    struct StubStore {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl StubStore {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl UserStore for StubStore {
        fn backend_name(&self) -> &'static str {
            "stub"
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, RepoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                Behavior::Returns(user) => Ok(user.clone()),
                Behavior::Fails => Err(RepoError::Db(sqlx::Error::PoolTimedOut)),
                Behavior::BadRow => Err(RepoError::InvalidRow("unknown role: librarian".into())),
                Behavior::Hangs => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(None)
                }
            }
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<UserCredentials>, RepoError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<UserRecord>, RepoError> {
            Ok(Vec::new())
        }
    }

    fn record(id: Uuid) -> UserRecord {
        UserRecord {
            id,
            email: "reader@library.test".into(),
            role: Role::Member,
        }
    }

    #[tokio::test]
    async fn found_user_is_returned() {
        let id = Uuid::new_v4();
        let store = StubStore::new(Behavior::Returns(Some(record(id))));
        let resolver = IdentityResolver::new(store.clone(), Duration::from_secs(1));

        let user = resolver.resolve(&IdentityClaim::new(id)).await.unwrap();

        assert_eq!(user, Some(record(id)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_user_is_none_not_an_error() {
        let store = StubStore::new(Behavior::Returns(None));
        let resolver = IdentityResolver::new(store, Duration::from_secs(1));

        let user = resolver
            .resolve(&IdentityClaim::new(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(user, None);
    }

    #[tokio::test]
    async fn store_error_is_unavailable() {
        let store = StubStore::new(Behavior::Fails);
        let resolver = IdentityResolver::new(store, Duration::from_secs(1));

        let err = resolver
            .resolve(&IdentityClaim::new(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::Unavailable(StoreUnavailable::Query { backend: "stub", .. })
        ));
    }

    #[tokio::test]
    async fn unreadable_row_is_not_an_outage() {
        let id = Uuid::new_v4();
        let store = StubStore::new(Behavior::BadRow);
        let resolver = IdentityResolver::new(store, Duration::from_secs(1));

        let err = resolver.resolve(&IdentityClaim::new(id)).await.unwrap_err();

        assert!(matches!(err, ResolveError::UnreadableRecord { user_id, .. } if user_id == id));
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_store_times_out() {
        let store = StubStore::new(Behavior::Hangs);
        let resolver = IdentityResolver::new(store, Duration::from_millis(250));

        let err = resolver
            .resolve(&IdentityClaim::new(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::Unavailable(StoreUnavailable::TimedOut(d)) if d == Duration::from_millis(250)
        ));
    }
}
