/*
 * Responsibility
 * - load Config → build dependencies → assemble the Router
 * - apply middleware (auth gate per v1, CORS, HTTP layers)
 * - start with axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, v1::handlers::health::health};
use crate::config::Config;
use crate::middleware;
use crate::repos::{PgUserStore, UserStore};
use crate::services::auth::{build_auth_gate, build_cookie_policy, build_token_issuer};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,library_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it gets noticed.
        // Production: default behavior, the server keeps running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("loading configuration")?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting library API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    // Lazy pool: an unreachable database shows up as 503 from the gate, not as a boot failure.
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.auth_store_timeout)
        .connect_lazy(&config.database_url)
        .context("invalid DATABASE_URL")?;
    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db));

    let state = build_state(&config, users);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config, users: Arc<dyn UserStore>) -> AppState {
    let gate = build_auth_gate(config, users.clone());
    let issuer = build_token_issuer(config);
    let cookies = build_cookie_policy(config);

    AppState::new(users, gate, issuer, cookies)
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}
