//! Client identification utilities
//!
//! The rate limiter keys its windows on the client's network identity.
//! Behind a reverse proxy the socket address is the proxy, so the
//! `X-Forwarded-For` header takes precedence when it parses.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Extract client IP address from headers
///
/// Checks the `X-Forwarded-For` header first (first IP in the list),
/// then falls back to the direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}

/// Rate-limit identity for a request: the client IP when known,
/// otherwise a shared fallback bucket.
pub fn client_identity(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> String {
    extract_client_ip(headers, direct_ip)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
