//! National ID Value Object
//!
//! CPF-style national identifier validated by its two check digits.
//! Digits 0..=8 carry the identity; digits 9 and 10 are checksums over
//! the preceding digits with decreasing weights. Both passes must agree
//! for the value to be accepted.
//!
//! The formatted input (`"529.982.247-25"` or bare digits) is what gets
//! stored; uniqueness is exact-match on that stored form.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Required digit count after stripping formatting
const NATIONAL_ID_DIGITS: usize = 11;

/// National ID value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId(String);

impl NationalId {
    /// Create a new national ID with checksum validation
    pub fn new(id: impl Into<String>) -> RegistryResult<Self> {
        let id = id.into();

        if !checksum_is_valid(&id) {
            return Err(RegistryError::InvalidField("national ID"));
        }

        Ok(Self(id))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the national ID as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NationalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Two-pass weighted checksum over the stripped digits.
fn checksum_is_valid(id: &str) -> bool {
    let digits: Vec<u32> = id.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != NATIONAL_ID_DIGITS {
        return false;
    }

    // Eleven identical digits always satisfy the weighted sums, so they
    // are rejected outright.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    // Check digit i is computed over digits 0..i with weights (i+1)-j
    for i in [9usize, 10] {
        let sum: u32 = digits[..i]
            .iter()
            .enumerate()
            .map(|(j, &d)| d * ((i + 1 - j) as u32))
            .sum();

        let digit = 11 - (sum % 11);
        let expected = if digit > 9 { 0 } else { digit };

        if expected != digits[i] {
            return false;
        }
    }

    true
}
