//! Campus Board Backend
//!
//! Credential store and announcement ledger for the college event board, persisted to a
//! single JSON file and served over a small REST API.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod notify;
mod services;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use notify::{LogNotifier, SmtpMailer};
use services::{Campus, RegistrationPolicy};
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub campus: Arc<Mutex<Campus>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let json_layer = config
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json());
    let text_layer = (!config.log_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::info!("Starting Campus Board Backend");
    tracing::info!("Data path: {:?}", config.data_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (CAMPUS_API_PSK). Authentication is disabled!");
    }

    let campus = build_campus(&config)?;

    let state = AppState {
        campus: Arc::new(Mutex::new(campus)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the data file and wire the services to their notifiers.
///
/// With `reset_on_start` (the default) every record in the data file is discarded here.
pub fn build_campus(config: &Config) -> Result<Campus, errors::AppError> {
    let mut store = Store::open(&config.data_path);

    if config.reset_on_start {
        if store.document().is_empty() {
            tracing::warn!("CAMPUS_RESET_ON_START is enabled: resetting {:?}", store.path());
        } else {
            tracing::warn!(
                "CAMPUS_RESET_ON_START is enabled: wiping {:?} ({} students, {} representatives, {} announcements)",
                store.path(),
                store.document().students.len(),
                store.document().representatives.len(),
                store.document().announcements.len(),
            );
        }
        store.reset()?;
    }

    if config.reject_duplicates {
        tracing::info!("Duplicate student numbers and usernames will be rejected");
    }

    Ok(Campus::new(
        store,
        Box::new(SmtpMailer::new(config.smtp.clone())),
        Box::new(LogNotifier),
        RegistrationPolicy {
            reject_duplicates: config.reject_duplicates,
        },
    ))
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        .route("/login", post(api::login))
        .route("/students", post(api::register_student))
        .route("/representatives", post(api::register_representative))
        .route(
            "/announcements",
            get(api::list_announcements).post(api::post_announcement),
        )
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
