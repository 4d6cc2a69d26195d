pub mod identity;

pub use identity::{AdminUser, AuthUser, CurrentIdentity, SuperAdminUser};
