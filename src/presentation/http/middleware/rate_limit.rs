// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client-IP limiter shared across all API routes. Tunable through
/// `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST`.
pub fn rate_limit_layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body> {
    static RATE_LIMITER: OnceLock<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> =
        OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(10);
            let burst_size = std::env::var("RATE_LIMIT_BURST")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(20);

            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(per_second);
            builder.burst_size(burst_size);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
