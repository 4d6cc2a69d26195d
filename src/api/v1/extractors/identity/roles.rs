/// Declares an extractor that requires at least `$role`.
///
/// Anonymous requests get 401, signed-in users below `$role` get 403.
macro_rules! require_role {
    ($(#[$meta:meta])* $name:ident, $role:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::repos::user_store::UserRecord);

        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = $crate::error::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let $crate::api::v1::extractors::AuthUser(user) =
                    <$crate::api::v1::extractors::AuthUser as axum::extract::FromRequestParts<S>>::from_request_parts(
                        parts, state,
                    )
                    .await?;

                if !user.role.at_least($role) {
                    tracing::info!(
                        user_id = %user.id,
                        role = %user.role,
                        required = %$role,
                        "role check failed"
                    );
                    return Err($crate::error::AppError::Forbidden);
                }

                Ok($name(user))
            }
        }
    };
}

require_role!(
    /// Admin dashboard access (admin or super-admin).
    AdminUser,
    crate::repos::user_store::Role::Admin
);

require_role!(
    /// Super-admin only.
    SuperAdminUser,
    crate::repos::user_store::Role::SuperAdmin
);
