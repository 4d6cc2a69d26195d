#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use library_api::app::{build_router, build_state};
use library_api::config::Config;
use library_api::repos::error::RepoError;
use library_api::repos::{Role, UserCredentials, UserRecord, UserStore};
use library_api::state::AppState;

pub const TEST_SECRET: &str = "library-api-test-secret";
pub const COOKIE_NAME: &str = "token";
pub const STORE_TIMEOUT_MS: u64 = 200;

/// In-memory `UserStore` with switches for outage and latency.
#[derive(Default)]
pub struct FakeUserStore {
    users: Mutex<HashMap<Uuid, UserCredentials>>,
    corrupt: Mutex<Vec<Uuid>>,
    unavailable: AtomicBool,
    delay_ms: AtomicUsize,
    id_lookups: AtomicUsize,
}

impl FakeUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, email: &str, role: Role, password: &str) -> UserRecord {
        let user = UserRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            role,
        };
        let password_hash = bcrypt::hash(password, 4).unwrap();
        self.users.lock().unwrap().insert(
            user.id,
            UserCredentials {
                user: user.clone(),
                password_hash,
            },
        );
        user
    }

    pub fn remove_user(&self, id: Uuid) {
        self.users.lock().unwrap().remove(&id);
    }

    // Later lookups of `id` fail as an undecodable row.
    pub fn corrupt_user(&self, id: Uuid) {
        self.corrupt.lock().unwrap().push(id);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms
            .store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    pub fn id_lookups(&self) -> usize {
        self.id_lookups.load(Ordering::SeqCst)
    }

    async fn simulate_backend(&self) -> Result<(), RepoError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    fn backend_name(&self) -> &'static str {
        "fake"
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepoError> {
        self.id_lookups.fetch_add(1, Ordering::SeqCst);
        self.simulate_backend().await?;
        if self.corrupt.lock().unwrap().contains(&id) {
            return Err(RepoError::InvalidRow(format!("unknown role for {}", id)));
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(&id)
            .map(|c| c.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, RepoError> {
        self.simulate_backend().await?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|c| c.user.email.to_lowercase() == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, RepoError> {
        self.simulate_backend().await?;
        let mut users: Vec<UserRecord> = self
            .users
            .lock()
            .unwrap()
            .values()
            .map(|c| c.user.clone())
            .collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }
}

pub fn test_config() -> Config {
    let timeout = STORE_TIMEOUT_MS.to_string();
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/library_test".to_string()),
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "AUTH_COOKIE_NAME" => Some(COOKIE_NAME.to_string()),
        "AUTH_STORE_TIMEOUT_MS" => Some(timeout.clone()),
        _ => None,
    })
    .unwrap()
}

pub fn test_state(store: Arc<FakeUserStore>) -> AppState {
    build_state(&test_config(), store)
}

pub fn test_app(store: Arc<FakeUserStore>) -> Router {
    let config = test_config();
    build_router(build_state(&config, store), &config)
}

/// Sign a token by hand; `exp_offset` is relative to now (negative = already expired).
pub fn sign_token(secret: &str, sub: &str, exp_offset: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    jsonwebtoken::encode(
        &Header::default(),
        &json!({ "sub": sub, "iat": now, "exp": now + exp_offset }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn valid_token_for(user: &UserRecord) -> String {
    sign_token(TEST_SECRET, &user.id.to_string(), 3600)
}

pub fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn auth_cookie(token: &str) -> String {
    format!("{}={}", COOKIE_NAME, token)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
