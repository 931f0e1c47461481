pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod middleware;
pub mod models;
pub mod seed;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use config::Config;
use db::{MongoSeasonStore, SeasonStore, spawn_connection_monitor};
use errors::AppError;
use middleware::{cors_layer, lowercase_path};
use state::{AppState, ConnectionState, StoreHealth};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{models::dataset::load_seasons, seed::seed_database};

/// Full application router: routes behind the readiness gate, plus CORS and request tracing.
///
/// Paths are matched case-insensitively and with trailing slashes ignored. Layers on a
/// `Router` only run after routing, so the routes sit behind an outer router's fallback
/// and the path rewriting happens on the way in.
pub fn build_app(state: AppState, allowed_origins: Option<&[String]>) -> Router {
    Router::new()
        .fallback_service(http::create_http_routes(state))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(axum_middleware::map_request(lowercase_path))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let seasons = load_seasons()?;
    tracing::info!("Loaded {} seasons from bundled dataset", seasons.len());

    let store: Arc<dyn SeasonStore> = Arc::new(MongoSeasonStore::connect(&config.mongo_url).await?);
    let health = StoreHealth::new(ConnectionState::Connecting);
    let monitor = spawn_connection_monitor(
        store.clone(),
        health.clone(),
        config.health_check_interval,
    );

    if config.reset_db {
        if let Err(e) = seed_database(store.as_ref(), &seasons).await {
            tracing::error!("Failed to seed database: {}", e);
        }
    }

    let state = AppState::new(seasons, health.clone(), config.resolve_index_html());
    let app = build_app(state, config.allowed_origins.as_deref());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server running on http://localhost:{}", config.port);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(health.clone()))
        .await;

    monitor.abort();
    health.set(ConnectionState::Disconnected);

    served.map_err(AppError::from)
}

// Flip to Disconnecting first so requests still in flight get a 503.
async fn shutdown_signal(health: StoreHealth) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down...");
    health.set(ConnectionState::Disconnecting);
}
