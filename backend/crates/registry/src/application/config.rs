//! Application Configuration
//!
//! Configuration for the Registry application layer.

use platform::cookie::CookieConfig;
use platform::rate_limit::RateLimitConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Per-route admission quotas.
///
/// Registration and login are write/verify paths and get the tight
/// quota; listing is read-only and gets the loose one.
#[derive(Debug, Clone)]
pub struct RouteLimits {
    pub register: RateLimitConfig,
    pub list: RateLimitConfig,
    pub login: RateLimitConfig,
}

impl Default for RouteLimits {
    fn default() -> Self {
        Self {
            register: RateLimitConfig::new(10, 60),
            list: RateLimitConfig::new(30, 60),
            login: RateLimitConfig::new(10, 60),
        }
    }
}

/// Registry application configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Secret key for HMAC-signing session markers (32 bytes)
    pub session_secret: [u8; 32],
    /// Session cookie attributes
    pub cookie: CookieConfig,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Per-route admission quotas
    pub limits: RouteLimits,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            session_secret: [0u8; 32],
            cookie: CookieConfig {
                name: "client_session".to_string(),
                ..CookieConfig::default()
            },
            password_pepper: None,
            limits: RouteLimits::default(),
        }
    }
}

impl RegistryConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_match_route_quotas() {
        let limits = RouteLimits::default();
        assert_eq!(limits.register.max_requests, 10);
        assert_eq!(limits.list.max_requests, 30);
        assert_eq!(limits.login.max_requests, 10);
        assert_eq!(limits.register.window.as_secs(), 60);
    }

    #[test]
    fn test_development_config_is_insecure_cookie() {
        let config = RegistryConfig::development();
        assert!(!config.cookie.secure);
        // Random secret, not the zeroed default
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }
}
