/*
 * Responsibility
 * - persistence layer: the UserStore contract and its Postgres implementation
 */
pub mod error;
pub mod user_repo;
pub mod user_store;

pub use user_repo::PgUserStore;
pub use user_store::{Role, UserCredentials, UserRecord, UserStore};
