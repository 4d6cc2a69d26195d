/*
 * Responsibility
 * - Load settings from the environment (DATABASE_URL, JWT_SECRET, cookie / CORS settings)
 * - Validate them up front: a missing secret is a startup failure, never a per-request one
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Shared HMAC secret for signing and verifying auth tokens.
///
/// Key material is not printable via Debug.
#[derive(Clone)]
pub struct JwtSecret(String);

impl JwtSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(<redacted>)")
    }
}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub database_max_connections: u32,

    pub cors_allowed_origins: Vec<String>,
    pub http_timeout: Duration,

    pub jwt_secret: JwtSecret,
    pub auth_cookie_name: String,
    pub access_token_ttl_seconds: u64,
    pub access_token_leeway_seconds: u64,
    // Upper bound for the gate's single user lookup.
    pub auth_store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    ///
    /// `from_env` is the production entry point; tests pass a closure over a map
    /// so they never have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"));
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let http_timeout = Duration::from_secs(parse_or(&lookup, "HTTP_TIMEOUT_SECONDS", 30)?);

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|v| !v.trim().is_empty())
            .map(JwtSecret::new)
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let auth_cookie_name = lookup("AUTH_COOKIE_NAME")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| "token".to_string());
        if auth_cookie_name.is_empty() || !auth_cookie_name.chars().all(is_cookie_name_char) {
            return Err(ConfigError::Invalid("AUTH_COOKIE_NAME"));
        }

        let access_token_ttl_seconds = parse_or(&lookup, "ACCESS_TOKEN_TTL_SECONDS", 86_400)?; // 1 day
        if access_token_ttl_seconds == 0 {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"));
        }
        let access_token_leeway_seconds = parse_or(&lookup, "ACCESS_TOKEN_LEEWAY_SECONDS", 0)?;

        let auth_store_timeout =
            Duration::from_millis(parse_or(&lookup, "AUTH_STORE_TIMEOUT_MS", 5_000)?);
        if auth_store_timeout.is_zero() {
            return Err(ConfigError::Invalid("AUTH_STORE_TIMEOUT_MS"));
        }

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            cors_allowed_origins,
            http_timeout,
            jwt_secret,
            auth_cookie_name,
            access_token_ttl_seconds,
            access_token_leeway_seconds,
            auth_store_timeout,
        })
    }
}

// Absent keys fall back to `default`; present but unparsable keys are rejected.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn is_cookie_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
