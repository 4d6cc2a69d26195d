/*
 * Responsibility
 * - response DTOs for user records
 * - the password hash never appears here
 */
use serde::Serialize;
use uuid::Uuid;

use crate::repos::user_store::{Role, UserRecord};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminSessionResponse {
    pub user: UserResponse,
    pub scope: Role,
}
