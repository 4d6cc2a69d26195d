//! Backend for the library application: the request authentication gate
//! plus the auth endpoints that sit on top of it.
//!
//! Every `/api/v1` request passes through [`middleware::auth::gate`], which
//! turns the auth cookie into an [`services::auth::Identity`] before the
//! handler runs. Handlers decide authorization through the extractors in
//! [`api::v1::extractors`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
