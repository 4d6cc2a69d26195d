/*
 * Responsibility
 * - SQLx queries against the users table
 * - PgUserStore: the production UserStore over a PgPool
 * - rows are converted to UserRecord here; a role we cannot read is RepoError::InvalidRow
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::user_store::{Role, UserCredentials, UserRecord, UserStore};

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

#[derive(Debug, FromRow)]
pub struct UserCredentialsRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    pub role: String,
    #[sqlx(rename = "passwordHash")]
    pub password_hash: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepoError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| RepoError::InvalidRow(format!("user {}: {}", row.id, e)))?;

        Ok(UserRecord {
            id: row.id,
            email: row.email,
            role,
        })
    }
}

impl TryFrom<UserCredentialsRow> for UserCredentials {
    type Error = RepoError;

    fn try_from(row: UserCredentialsRow) -> Result<Self, Self::Error> {
        let user = UserRecord::try_from(UserRow {
            id: row.id,
            email: row.email,
            role: row.role,
        })?;

        Ok(UserCredentials {
            user,
            password_hash: row.password_hash,
        })
    }
}

#[derive(Clone, Debug)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT "userId", "email", "role"
            FROM users
            WHERE "userId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, RepoError> {
        let row = sqlx::query_as::<_, UserCredentialsRow>(
            r#"
            SELECT "userId", "email", "role", "passwordHash"
            FROM users
            WHERE lower("email") = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        row.map(UserCredentials::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<UserRecord>, RepoError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT "userId", "email", "role"
            FROM users
            ORDER BY "createdAt" DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }
}
