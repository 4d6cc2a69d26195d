/**
 * Responsibility
 * - What the repo layer reports upward
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid row: {0}")]
    InvalidRow(String),
}
