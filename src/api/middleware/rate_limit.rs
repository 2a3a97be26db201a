//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Interval after which one request of the quota is replenished (10 per second).
const REPLENISH_MS: u64 = 100;

/// Burst size allowed per client IP.
const BURST_SIZE: u32 = 50;

/// Creates a per-IP rate limiter keyed on the socket peer address.
///
/// # Limits
///
/// - **Rate**: 10 requests per second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// Requires the service to be served with `into_make_service_with_connect_info`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_MS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed on `X-Forwarded-For` / `X-Real-IP` / `Forwarded`.
///
/// Use only behind a trusted reverse proxy; clients can forge these headers.
pub fn proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond(REPLENISH_MS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
