//! Email Value Object
//!
//! Represents an email address that matched the registration pattern.
//! The value is stored exactly as supplied (post-sanitization); lookups
//! and the uniqueness constraint are exact-match, so no case folding is
//! applied here.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Anchored at both ends: local part and domain of word characters,
/// dots or hyphens, then a literal dot and a word-character TLD.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern compiles"));

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> RegistryResult<Self> {
        let email = email.into();

        if email.len() > EMAIL_MAX_LENGTH || !EMAIL_PATTERN.is_match(&email) {
            return Err(RegistryError::InvalidField("email"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = RegistryError;

    fn from_str(s: &str) -> RegistryResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
