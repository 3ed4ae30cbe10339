//! API DTOs (Data Transfer Objects)
//!
//! Form field names are the wire contract and are case-sensitive. Every
//! field defaults to empty so that a missing field reaches the use case
//! as `""` and comes back as the domain's missing-field error instead
//! of a deserialization rejection.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register Client
// ============================================================================

/// `POST /register-client` form body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterClientForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// `POST /login-client` form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Register Supplier
// ============================================================================

/// `POST /register-supplier` form body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterSupplierForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub legal_name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub service_description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub contract_ref: String,
    #[serde(default)]
    pub responsible_party: String,
    #[serde(default)]
    pub notes: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Success envelope: `{"status": "ok", "message": "..."}`
///
/// The error counterpart is produced by `AppError`'s `IntoResponse`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: message.into(),
        }
    }
}
