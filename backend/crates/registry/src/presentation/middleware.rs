//! Admission Middleware
//!
//! Per-route rate limiting. Every rate-limited route carries one of
//! these in front of its handler, each with its own quota over the one
//! shared limiter, so a request is counted before it can touch
//! validation or storage.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::client::client_identity;
use platform::rate_limit::{RateLimitConfig, RateLimitStore, SlidingWindowLimiter};

use crate::error::RegistryError;

/// Middleware state: the shared limiter plus this route's quota
#[derive(Clone)]
pub struct AdmissionState {
    pub limiter: Arc<SlidingWindowLimiter>,
    pub quota: RateLimitConfig,
}

/// Middleware that admits or rejects a request before the handler runs
pub async fn require_admission(
    axum::extract::State(state): axum::extract::State<AdmissionState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let direct_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());

    let identity = client_identity(req.headers(), direct_ip);

    let result = match state.limiter.check_and_increment(&identity, &state.quota).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Rate limit check failed");
            return Err(RegistryError::Internal("Rate limit check failed".to_string())
                .into_response());
        }
    };

    if !result.allowed {
        tracing::warn!(
            identity = %identity,
            max_requests = state.quota.max_requests,
            reset_at_ms = result.reset_at_ms,
            "Request rejected by admission control"
        );
        return Err(RegistryError::RateLimited.into_response());
    }

    Ok(next.run(req).await)
}
