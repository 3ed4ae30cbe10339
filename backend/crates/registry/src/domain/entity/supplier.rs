//! Supplier Entity
//!
//! Structurally parallel to the client record: unique tax ID instead of
//! the email/national-ID pair, a longer tail of free-text contract
//! fields, and no credentials (suppliers do not log in).

use kernel::id::SupplierId;
use serde::Serialize;

use crate::domain::value_object::{Email, Phone};

/// A validated supplier record ready for insertion
///
/// Only `name`, `legal_name` and `tax_id` are required; the optional
/// fields are validated when supplied and stored as NULL otherwise.
#[derive(Debug)]
pub struct NewSupplier {
    pub name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub age: Option<i32>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub service_description: Option<String>,
    pub duration: Option<String>,
    pub contract_ref: Option<String>,
    pub responsible_party: Option<String>,
    pub notes: Option<String>,
}

/// Listing read model
#[derive(Debug, Clone, Serialize)]
pub struct SupplierSummary {
    pub id: SupplierId,
    pub name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
