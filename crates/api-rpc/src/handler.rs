//! RPC Method Handlers
//!
//! One handler per exposed method, with the dispatcher injected.

use crate::error::to_envelope;
use crate::rate_limiter::RateLimiter;
use crate::types::{HealthResponse, RequestEnvelope, ResponseEnvelope};
use std::sync::Arc;
use xrpl_gateway_core::Dispatcher;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    dispatcher: Arc<Dispatcher>,
    rate_limiter: RateLimiter,
}

impl RpcHandler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        // Default: 200 burst, 100 req/sec (configurable via env)
        let max_burst: u32 = std::env::var("XRPL_GATEWAY_RATE_LIMIT_BURST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(200);

        let rate_per_sec: u32 = std::env::var("XRPL_GATEWAY_RATE_LIMIT_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            dispatcher,
            rate_limiter: RateLimiter::new(max_burst, rate_per_sec),
        }
    }

    /// gateway.request.v1
    ///
    /// Infallible from the transport's point of view: every failure,
    /// including rate limiting, rides in the envelope's `error` field with
    /// success-shaped framing.
    pub async fn request(&self, envelope: RequestEnvelope) -> ResponseEnvelope {
        if !self.rate_limiter.check().await {
            return ResponseEnvelope::failure("Rate limit exceeded. Please slow down.");
        }

        to_envelope(
            self.dispatcher
                .handle(&envelope.kind, &envelope.params)
                .await,
        )
    }

    /// gateway.health.v1
    pub async fn health(&self) -> HealthResponse {
        HealthResponse::from_probe(self.dispatcher.healthy().await)
    }
}
