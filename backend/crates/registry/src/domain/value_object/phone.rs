//! Phone Value Object
//!
//! A phone number is valid when, after dropping every formatting
//! character, exactly 10 or 11 digits remain: area code plus number,
//! with or without the extra mobile digit. The formatted input is what
//! gets stored and echoed back.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Accepted digit counts after stripping formatting
const VALID_DIGIT_COUNTS: [usize; 2] = [10, 11];

/// Phone number value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number with validation
    pub fn new(phone: impl Into<String>) -> RegistryResult<Self> {
        let phone = phone.into();

        let digit_count = phone.chars().filter(char::is_ascii_digit).count();
        if !VALID_DIGIT_COUNTS.contains(&digit_count) {
            return Err(RegistryError::InvalidField("phone"));
        }

        Ok(Self(phone))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Get the phone number as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }

    /// The number with formatting stripped
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
