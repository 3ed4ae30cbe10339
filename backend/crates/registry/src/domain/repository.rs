//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer. The stores keep unique indexes on the client
//! email / national-ID pair and the supplier tax ID; the `exists_*`
//! methods are a fast path in front of those indexes, not a substitute
//! for them.

use kernel::id::{ClientId, SupplierId};

use crate::domain::entity::{
    client::{ClientCredentials, ClientSummary, NewClient},
    supplier::{NewSupplier, SupplierSummary},
};
use crate::domain::value_object::{Email, NationalId};
use crate::error::RegistryResult;

/// Client repository trait
#[trait_variant::make(ClientRepository: Send)]
pub trait LocalClientRepository {
    /// Insert a new client, returning the store-assigned ID.
    ///
    /// A unique-index collision surfaces as
    /// [`crate::error::RegistryError::DuplicateRecord`].
    async fn insert(&self, client: &NewClient) -> RegistryResult<ClientId>;

    /// Check whether a record with this email or national ID exists
    async fn exists_with_email_or_national_id(
        &self,
        email: &Email,
        national_id: &NationalId,
    ) -> RegistryResult<bool>;

    /// Exact-match credential lookup for login
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> RegistryResult<Option<ClientCredentials>>;

    /// All client summaries, most recently created first
    async fn list_summaries(&self) -> RegistryResult<Vec<ClientSummary>>;
}

/// Supplier repository trait
#[trait_variant::make(SupplierRepository: Send)]
pub trait LocalSupplierRepository {
    /// Insert a new supplier, returning the store-assigned ID.
    ///
    /// A unique-index collision surfaces as
    /// [`crate::error::RegistryError::DuplicateTaxId`].
    async fn insert(&self, supplier: &NewSupplier) -> RegistryResult<SupplierId>;

    /// Check whether a record with this tax ID exists
    async fn exists_with_tax_id(&self, tax_id: &str) -> RegistryResult<bool>;

    /// All supplier summaries, most recently created first
    async fn list_summaries(&self) -> RegistryResult<Vec<SupplierSummary>>;
}
