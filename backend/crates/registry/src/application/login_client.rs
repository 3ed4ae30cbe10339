//! Login Client Use Case
//!
//! Authenticates a client against the stored credential hash and
//! produces a [`SessionMarker`]. Every failure path collapses into the
//! one `InvalidCredentials` error: an unknown email, a malformed
//! password and a wrong password are indistinguishable to the caller.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};
use platform::sanitize::sanitize;

use crate::application::config::RegistryConfig;
use crate::domain::entity::session_marker::SessionMarker;
use crate::domain::repository::ClientRepository;
use crate::error::{RegistryError, RegistryResult};

/// Login input
pub struct LoginClientInput {
    pub email: String,
    pub password: String,
}

/// Login client use case
pub struct LoginClientUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
    config: Arc<RegistryConfig>,
}

impl<R> LoginClientUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<RegistryConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginClientInput) -> RegistryResult<SessionMarker> {
        let email = sanitize(&input.email);

        let credentials = self
            .repo
            .find_credentials_by_email(&email)
            .await?
            .ok_or(RegistryError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| RegistryError::InvalidCredentials)?;

        let stored_hash = HashedPassword::from_phc_string(&credentials.password_hash)
            .map_err(|e| RegistryError::Internal(e.to_string()))?;

        if !stored_hash.verify(&password, self.config.pepper()) {
            return Err(RegistryError::InvalidCredentials);
        }

        tracing::info!(client_id = %credentials.id, "Client signed in");

        Ok(SessionMarker::new(credentials.id, credentials.name))
    }
}
