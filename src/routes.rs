//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /business-data`       - Get or create a snapshot
//! - `GET  /regenerate-headline` - Regenerate a headline
//! - `GET  /businesses`          - List all records
//! - `GET  /health`              - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable allowed origins (any by default)
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `allowed_origins` - CORS origins; empty or `*` allows any
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    allowed_origins: &[String],
) -> NormalizePath<Router> {
    let api_router = api::routes::routes();

    let api_router = if behind_proxy {
        api_router.layer(rate_limit::proxy_layer())
    } else {
        api_router.layer(rate_limit::layer())
    };

    let router = api_router
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
