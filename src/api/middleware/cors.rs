//! Cross-origin resource sharing for browser clients.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS layer.
///
/// An empty origin list or a list containing `*` allows any origin. Otherwise
/// only the listed origins are allowed; entries that are not valid header
/// values are skipped (they are rejected earlier by config validation).
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
