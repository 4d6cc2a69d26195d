//! Auth cookie handling: reading the credential off a request and building
//! the cookies that carry it back to the browser.
use std::fmt;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Opaque bearer token as presented by the client.
///
/// The raw value is not printable via Debug so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Returns the value of the `cookie_name` cookie, if any.
///
/// Never fails: a missing, unparsable or empty cookie just means the request is anonymous.
pub fn extract_credential(headers: &HeaderMap, cookie_name: &str) -> Option<Credential> {
    let jar = CookieJar::from_headers(headers);
    let value = jar.get(cookie_name)?.value().trim().to_string();

    if value.is_empty() {
        return None;
    }

    Some(Credential::new(value))
}

/// Attributes of the auth cookie as set by login and cleared by logout.
#[derive(Debug, Clone)]
pub struct CookiePolicy {
    pub name: String,
    // Only sent over HTTPS. On in production.
    pub secure: bool,
    pub max_age_seconds: u64,
}

impl CookiePolicy {
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let max_age = i64::try_from(self.max_age_seconds).unwrap_or(i64::MAX);

        Cookie::build((self.name.clone(), token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::seconds(max_age))
            .build()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.name.clone(), ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build();
        cookie.make_removal();
        cookie
    }
}
