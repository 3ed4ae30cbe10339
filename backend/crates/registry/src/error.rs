//! Registry Error Types
//!
//! Registry-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every error is translated to a
//! response at the service boundary; nothing crosses the transport
//! layer unformatted.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-specific error variants
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required field is missing or empty after sanitization
    #[error("All fields are required")]
    MissingFields,

    /// A field failed its validation rule; names the rule, not the value
    #[error("Invalid {0}")]
    InvalidField(&'static str),

    /// Client unique-key collision. Deliberately does not say whether
    /// the email or the national ID collided.
    #[error("Email or national ID already registered")]
    DuplicateRecord,

    /// Supplier tax-ID collision
    #[error("Tax ID already registered")]
    DuplicateTaxId,

    /// Authentication failure. One message for unknown account and
    /// wrong password, so accounts cannot be enumerated.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Request rejected by admission control
    #[error("Too many requests")]
    RateLimited,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Duplicates surface as 400 on this API, not 409
            RegistryError::MissingFields
            | RegistryError::InvalidField(_)
            | RegistryError::DuplicateRecord
            | RegistryError::DuplicateTaxId => StatusCode::BAD_REQUEST,
            RegistryError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            RegistryError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::MissingFields
            | RegistryError::InvalidField(_)
            | RegistryError::DuplicateRecord
            | RegistryError::DuplicateTaxId => ErrorKind::BadRequest,
            RegistryError::InvalidCredentials => ErrorKind::Unauthorized,
            RegistryError::RateLimited => ErrorKind::TooManyRequests,
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side detail stays in the logs; the response body carries a
    /// generic message for 5xx errors.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::Internal(msg) => {
                tracing::error!(message = %msg, "Registry internal error");
            }
            RegistryError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            RegistryError::RateLimited => {
                tracing::warn!("Request rejected by rate limit");
            }
            _ => {
                tracing::debug!(error = %self, "Registry error");
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordHashError> for RegistryError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        RegistryError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RegistryError::MissingFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::InvalidField("email").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::DuplicateRecord.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RegistryError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            RegistryError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_names_the_rule() {
        assert_eq!(
            RegistryError::InvalidField("email").to_string(),
            "Invalid email"
        );
        assert_eq!(
            RegistryError::InvalidField("national ID").to_string(),
            "Invalid national ID"
        );
    }

    #[test]
    fn test_duplicate_message_does_not_name_the_field() {
        let msg = RegistryError::DuplicateRecord.to_string();
        // One generic message whichever key collided
        assert_eq!(msg, "Email or national ID already registered");
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = RegistryError::Internal("connection pool exhausted".into());
        let app = err.to_app_error();
        assert_eq!(app.message(), "Internal server error");
    }
}
