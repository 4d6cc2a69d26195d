use axum::Json;

use crate::{
    api::v1::{
        dto::users::{AdminSessionResponse, UserResponse},
        extractors::SuperAdminUser,
    },
    repos::user_store::Role,
};

/// GET /admin/session: probe used by the super-admin dashboard.
pub async fn session(SuperAdminUser(user): SuperAdminUser) -> Json<AdminSessionResponse> {
    Json(AdminSessionResponse {
        user: UserResponse::from(user),
        scope: Role::SuperAdmin,
    })
}
