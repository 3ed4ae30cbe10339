//! List Clients Use Case

use std::sync::Arc;

use crate::domain::entity::client::ClientSummary;
use crate::domain::repository::ClientRepository;
use crate::error::RegistryResult;

/// List clients use case
///
/// Read-only; admission control is the only gate in front of it. The
/// summaries the repository returns never include the password hash.
pub struct ListClientsUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
}

impl<R> ListClientsUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Most recently created first
    pub async fn execute(&self) -> RegistryResult<Vec<ClientSummary>> {
        self.repo.list_summaries().await
    }
}
