use crate::error::AppError;

/// bcrypt check, run on the blocking pool so a login does not stall the runtime.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "password verification task failed");
            AppError::Internal
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "stored password hash is unusable");
            AppError::Internal
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matching_password_verifies() {
        let hash = bcrypt::hash("correct horse", 4).unwrap();

        assert!(verify_password("correct horse".into(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        let hash = bcrypt::hash("correct horse", 4).unwrap();

        assert!(!verify_password("battery staple".into(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_hash_is_an_internal_error() {
        let result = verify_password("anything".into(), "not-a-hash".into()).await;

        assert!(matches!(result, Err(AppError::Internal)));
    }
}
