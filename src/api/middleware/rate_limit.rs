//! Per-client rate limiting using a token bucket.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter layer keyed by the peer IP address.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the API routes.
///
/// Each client IP may send up to `burst` requests at once; one slot is
/// replenished every `replenish_ms` milliseconds. Requests exceeding the
/// limit receive `429 Too Many Requests`.
///
/// The peer address comes from `ConnectInfo`, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `burst` or `replenish_ms` is zero.
pub fn layer(burst: u32, replenish_ms: u64) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(burst)
        .finish()
        .context("Rate limit burst and period must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
