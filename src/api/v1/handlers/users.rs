/*
 * Responsibility
 * - admin user directory (read-only)
 * - AdminUser extractor decides access; handlers only talk to the store
 */
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    api::v1::{dto::users::UserResponse, extractors::AdminUser},
    error::AppError,
    state::AppState,
};

pub async fn list_users(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(UserResponse::from(user)))
}
