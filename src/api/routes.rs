//! API route configuration.

use crate::api::handlers::{
    business_data_handler, businesses_handler, health_handler, regenerate_headline_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `POST /business-data`        - Get or create a business snapshot
/// - `GET  /regenerate-headline`  - Replace the headline of an existing business
/// - `GET  /businesses`           - List every record, newest first
/// - `GET  /health`               - Store connectivity check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/business-data", post(business_data_handler))
        .route("/regenerate-headline", get(regenerate_headline_handler))
        .route("/businesses", get(businesses_handler))
        .route("/health", get(health_handler))
}
