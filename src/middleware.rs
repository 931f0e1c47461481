use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, Uri, header, uri::PathAndQuery},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{errors::AppError, state::StoreHealth};

// Readiness gate: nothing gets past this unless the store is connected.
pub async fn require_store_ready(
    State(health): State<StoreHealth>,
    request: Request,
    next: Next,
) -> Response {
    if health.is_connected() {
        next.run(request).await
    } else {
        tracing::debug!(
            "Rejecting {} {}: store is {:?}",
            request.method(),
            request.uri().path(),
            health.state()
        );
        AppError::ServiceUnavailable.into_response()
    }
}

// Routes match regardless of case. The query string is left alone.
pub async fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri().clone();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let path = uri.path().to_ascii_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    match path_and_query.parse::<PathAndQuery>() {
        Ok(pq) => {
            let mut parts = uri.clone().into_parts();
            parts.path_and_query = Some(pq);
            match Uri::from_parts(parts) {
                Ok(lowered) => *request.uri_mut() = lowered,
                Err(e) => tracing::warn!("Could not rebuild lowercased URI: {}", e),
            }
        }
        Err(e) => tracing::warn!("Could not lowercase path {}: {}", uri.path(), e),
    }

    request
}

// CORS: any origin unless ALLOWED_ORIGINS narrows it down
pub fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let origin = match allowed_origins {
        Some(origins) if origins.iter().any(|s| s == "*") => AllowOrigin::from(Any),
        Some(origins) => {
            let parsed = origins
                .iter()
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid CORS origin '{}': {}", s, e);
                        None
                    }
                })
                .collect::<Vec<_>>();
            tracing::info!("CORS allowed origins: {:?}", parsed);
            AllowOrigin::list(parsed)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}
