//! Register Supplier Use Case
//!
//! Same pipeline as client registration with a lighter rule set: only
//! name, legal name and tax ID are required; contact fields are
//! validated when present and stored as NULL otherwise. Suppliers carry
//! no credentials.

use std::sync::Arc;

use platform::sanitize::sanitize;

use kernel::id::SupplierId;

use crate::domain::entity::supplier::NewSupplier;
use crate::domain::repository::SupplierRepository;
use crate::domain::value_object::{Email, Phone};
use crate::error::{RegistryError, RegistryResult};

/// Raw form fields as the transport delivered them
pub struct RegisterSupplierInput {
    pub name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub service_description: String,
    pub duration: String,
    pub contract_ref: String,
    pub responsible_party: String,
    pub notes: String,
}

/// Register supplier use case
pub struct RegisterSupplierUseCase<R>
where
    R: SupplierRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterSupplierUseCase<R>
where
    R: SupplierRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterSupplierInput) -> RegistryResult<SupplierId> {
        let name = sanitize(&input.name);
        let legal_name = sanitize(&input.legal_name);
        let tax_id = sanitize(&input.tax_id);

        if name.is_empty() || legal_name.is_empty() || tax_id.is_empty() {
            return Err(RegistryError::MissingFields);
        }

        let age = match sanitize(&input.age) {
            s if s.is_empty() => None,
            s => Some(
                s.parse::<i32>()
                    .map_err(|_| RegistryError::InvalidField("age"))?,
            ),
        };

        let email = match sanitize(&input.email) {
            s if s.is_empty() => None,
            s => Some(Email::new(s)?),
        };

        let phone = match sanitize(&input.phone) {
            s if s.is_empty() => None,
            s => Some(Phone::new(s)?),
        };

        if self.repo.exists_with_tax_id(&tax_id).await? {
            return Err(RegistryError::DuplicateTaxId);
        }

        let supplier = NewSupplier {
            name,
            legal_name,
            tax_id,
            age,
            phone,
            email,
            address: optional(sanitize(&input.address)),
            website: optional(sanitize(&input.website)),
            service_description: optional(sanitize(&input.service_description)),
            duration: optional(sanitize(&input.duration)),
            contract_ref: optional(sanitize(&input.contract_ref)),
            responsible_party: optional(sanitize(&input.responsible_party)),
            notes: optional(sanitize(&input.notes)),
        };

        let supplier_id = self.repo.insert(&supplier).await?;

        tracing::info!(supplier_id = %supplier_id, "Supplier registered");

        Ok(supplier_id)
    }
}

fn optional(sanitized: String) -> Option<String> {
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    }
}
