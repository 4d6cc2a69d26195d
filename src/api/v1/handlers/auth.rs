/*
 * Responsibility
 * - POST /auth/login: check email + password, put a signed token in the auth cookie
 * - POST /auth/logout: clear the cookie
 * - GET  /auth/me: the signed-in user
 */
use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    api::v1::{
        dto::{auth::LoginRequest, users::UserResponse},
        extractors::AuthUser,
    },
    error::AppError,
    services::auth::password::verify_password,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<UserResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_LOGIN_REQUEST", msg))?;

    let email = req.normalized_email();
    let Some(credentials) = state.users.find_by_email(&email).await? else {
        tracing::info!("login rejected: unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(req.password, credentials.password_hash).await? {
        tracing::info!(user_id = %credentials.user.id, "login rejected: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let user = credentials.user;
    let token = state.issuer.issue(user.id)?;

    tracing::info!(user_id = %user.id, role = %user.role, "user logged in");

    Ok((
        jar.add(state.cookies.session_cookie(token)),
        Json(UserResponse::from(user)),
    ))
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (StatusCode, CookieJar) {
    // Always emit the removal cookie, even when the request carried none.
    (
        StatusCode::NO_CONTENT,
        jar.add(state.cookies.removal_cookie()),
    )
}

pub async fn me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
