/*
 * Responsibility
 * - GET /health (liveness)
 * - mounted outside /api/v1 so it never touches the user store
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
