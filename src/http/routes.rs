use axum::{
    Router, middleware as axum_middleware,
    routing::{get, get_service},
};
use tower_http::services::ServeFile;

use crate::{
    http::handlers::{fallback_handler, get_season_handler, get_seasons_handler},
    middleware::require_store_ready,
    state::AppState,
};

// Unsupported methods on known paths fall through to the same message as unknown paths.
pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get_service(ServeFile::new(&state.index_html)).fallback(fallback_handler),
        )
        .route(
            "/seasons",
            get(get_seasons_handler).fallback(fallback_handler),
        )
        .route(
            "/seasons/{season}",
            get(get_season_handler).fallback(fallback_handler),
        )
        .fallback(fallback_handler)
        .layer(axum_middleware::from_fn_with_state(
            state.health.clone(),
            require_store_ready,
        ))
        .with_state(state)
}
