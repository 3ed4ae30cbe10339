//! Register Client Use Case
//!
//! Admission already happened in the middleware by the time this runs.
//! The pipeline is: sanitize, presence check, field validation,
//! duplicate check, hash, insert. The first failing step short-circuits.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::sanitize::sanitize;

use kernel::id::ClientId;

use crate::application::config::RegistryConfig;
use crate::domain::entity::client::NewClient;
use crate::domain::repository::ClientRepository;
use crate::domain::value_object::{Email, NationalId, Phone};
use crate::error::{RegistryError, RegistryResult};

/// Raw form fields as the transport delivered them
pub struct RegisterClientInput {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
    pub national_id: String,
    pub password: String,
}

/// Register client use case
pub struct RegisterClientUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
    config: Arc<RegistryConfig>,
}

impl<R> RegisterClientUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<RegistryConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterClientInput) -> RegistryResult<ClientId> {
        // Sanitize every free-text field. The password is exempt: it is
        // hashed, never stored or echoed.
        let name = sanitize(&input.name);
        let age = sanitize(&input.age);
        let email = sanitize(&input.email);
        let phone = sanitize(&input.phone);
        let address = sanitize(&input.address);
        let gender = sanitize(&input.gender);
        let national_id = sanitize(&input.national_id);

        // Presence check before any field-specific rule
        let required = [
            &name,
            &age,
            &email,
            &phone,
            &address,
            &gender,
            &national_id,
            &input.password,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(RegistryError::MissingFields);
        }

        // Field validators run in a fixed order; the first failure wins
        let email = Email::new(email)?;
        let phone = Phone::new(phone)?;
        let national_id = NationalId::new(national_id)?;

        // Fast-path duplicate check. The store's unique indexes remain
        // the authoritative guard under concurrency.
        if self
            .repo
            .exists_with_email_or_national_id(&email, &national_id)
            .await?
        {
            return Err(RegistryError::DuplicateRecord);
        }

        // Age is coerced at insert time, not defaulted
        let age: i32 = age
            .parse()
            .map_err(|_| RegistryError::InvalidField("age"))?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| RegistryError::InvalidField("password"))?;
        let password_hash = password.hash(self.config.pepper())?;

        let client = NewClient {
            name,
            age,
            email,
            phone,
            address,
            gender,
            national_id,
            password_hash,
        };

        let client_id = self.repo.insert(&client).await?;

        tracing::info!(client_id = %client_id, "Client registered");

        Ok(client_id)
    }
}
