//! List Suppliers Use Case

use std::sync::Arc;

use crate::domain::entity::supplier::SupplierSummary;
use crate::domain::repository::SupplierRepository;
use crate::error::RegistryResult;

/// List suppliers use case
pub struct ListSuppliersUseCase<R>
where
    R: SupplierRepository,
{
    repo: Arc<R>,
}

impl<R> ListSuppliersUseCase<R>
where
    R: SupplierRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Most recently created first
    pub async fn execute(&self) -> RegistryResult<Vec<SupplierSummary>> {
        self.repo.list_summaries().await
    }
}
