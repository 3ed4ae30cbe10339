//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Input sanitization for free-text form fields
//! - Password hashing (Argon2id) and verification
//! - Sliding-window rate limiting infrastructure
//! - Client IP extraction
//! - Cookie management
//! - Cryptographic utilities (SHA-256, HMAC, Base64)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
pub mod rate_limit;
pub mod sanitize;
