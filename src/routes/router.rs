use crate::config::CorsConfig;
use crate::error::AppError;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::root;

/// Create application router
pub fn create_router(cors_config: &CorsConfig) -> axum::Router {
    use crate::middleware::request_id_middleware;

    axum::Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health_check))
        .fallback(|| async { AppError::NotFound })
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

/// Build the CORS layer from configuration.
///
/// Credentialed responses may not use `*`, so "any method" and "any header"
/// mirror whatever the preflight asked for, and a `*` origin mirrors the
/// request's `Origin`.
pub fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors_config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(cors_config.origin_header_values())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(cors_config.allow_credentials)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
