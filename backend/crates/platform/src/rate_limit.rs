//! Rate Limiting Infrastructure
//!
//! Common rate limiting abstractions plus the in-process sliding-window
//! implementation used for request admission. The window slides
//! continuously with real time: every check prunes timestamps older than
//! `now - window` before counting, so there is no burst-at-boundary
//! effect the way a fixed-bucket counter has.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and increment rate limit counter
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-process sliding-window limiter.
///
/// One instance is shared by every rate-limited route; the per-route
/// `(max_requests, window)` pair arrives with each call. Identities map
/// to the ordered timestamps of their admitted requests. The single lock
/// serializes prune-and-append, so concurrent requests from one identity
/// cannot slip past the quota.
#[derive(Debug, Default)]
pub struct SlidingWindowLimiter {
    /// Admitted-request timestamps (epoch ms) per identity
    windows: Mutex<HashMap<String, Vec<i64>>>,
}

impl SlidingWindowLimiter {
    pub fn new() -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or reject a request from `identity` under `config`.
    ///
    /// Rejected attempts are not recorded, so hammering a closed window
    /// does not extend it.
    pub fn admit(&self, identity: &str, config: &RateLimitConfig) -> RateLimitResult {
        let now = now_ms();
        let cutoff = now - config.window_ms();

        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());
        let entry = windows.entry(identity.to_string()).or_default();
        entry.retain(|&t| t > cutoff);

        if entry.len() as u32 >= config.max_requests {
            // Oldest recorded timestamp decides when a slot opens up
            let reset_at_ms = entry
                .first()
                .map(|t| t + config.window_ms())
                .unwrap_or(now);
            return RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_at_ms,
            };
        }

        entry.push(now);
        RateLimitResult {
            allowed: true,
            remaining: config.max_requests - entry.len() as u32,
            reset_at_ms: now + config.window_ms(),
        }
    }

    /// Drop identities whose every timestamp is older than `older_than`.
    ///
    /// Pruning otherwise only happens when an identity comes back, so
    /// this should run periodically to keep one-shot identities from
    /// accumulating.
    pub fn cleanup(&self, older_than: Duration) {
        let cutoff = now_ms() - older_than.as_millis() as i64;
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());
        windows.retain(|_, times| {
            times.retain(|&t| t > cutoff);
            !times.is_empty()
        });
    }

    /// Number of identities currently tracked
    pub fn tracked_identities(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl RateLimitStore for SlidingWindowLimiter {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.admit(key, config))
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
