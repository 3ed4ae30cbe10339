//! Registry Backend Module
//!
//! Registration and authentication for client and supplier records.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, admission middleware
//!
//! ## Features
//! - Client registration with sanitization and field validation
//!   (email, phone, national-ID checksum)
//! - Duplicate-key enforcement on email / national ID / tax ID
//! - Password login issuing a signed session marker cookie
//! - Supplier registration and listing
//! - Per-route sliding-window request admission
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified in constant time
//! - Login failures are indistinguishable between unknown account and
//!   wrong password
//! - Free-text input is escaped and stripped before validation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use infra::postgres::PgRegistryRepository;
pub use presentation::router::{registry_router, registry_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
