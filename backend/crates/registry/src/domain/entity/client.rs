//! Client Entity
//!
//! Three shapes of the same record, one per access path:
//! - [`NewClient`] - validated input on its way into the store; the ID
//!   and creation timestamp are assigned there.
//! - [`ClientSummary`] - listing read model. Deliberately has no
//!   password-hash field, so the hash cannot leak through a listing.
//! - [`ClientCredentials`] - login read model; the only shape that
//!   carries the stored hash.
//!
//! Records are never mutated once created.

use kernel::id::ClientId;
use platform::password::HashedPassword;
use serde::Serialize;

use crate::domain::value_object::{Email, NationalId, Phone};

/// A fully validated client record ready for insertion
#[derive(Debug)]
pub struct NewClient {
    pub name: String,
    pub age: i32,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub gender: String,
    pub national_id: NationalId,
    pub password_hash: HashedPassword,
}

/// Listing read model
#[derive(Debug, Clone, Serialize)]
pub struct ClientSummary {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub gender: String,
}

/// Login read model
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub id: ClientId,
    pub name: String,
    /// PHC-formatted Argon2id hash as stored
    pub password_hash: String,
}
