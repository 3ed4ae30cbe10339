//! Use-case tests for the registry crate
//!
//! The repository traits are the seam: these tests run the real use
//! cases over an in-memory repository whose inserts enforce the same
//! uniqueness the store's indexes do.

use std::sync::{Arc, Mutex};

use kernel::id::{ClientId, SupplierId};

use crate::application::config::RegistryConfig;
use crate::application::{
    ListClientsUseCase, ListSuppliersUseCase, LoginClientInput, LoginClientUseCase,
    RegisterClientInput, RegisterClientUseCase, RegisterSupplierInput, RegisterSupplierUseCase,
};
use crate::domain::entity::{
    client::{ClientCredentials, ClientSummary, NewClient},
    supplier::{NewSupplier, SupplierSummary},
};
use crate::domain::repository::{ClientRepository, SupplierRepository};
use crate::domain::value_object::{Email, NationalId};
use crate::error::{RegistryError, RegistryResult};

// ============================================================================
// In-memory repository
// ============================================================================

struct StoredClient {
    id: i64,
    name: String,
    email: String,
    phone: String,
    address: String,
    gender: String,
    national_id: String,
    password_hash: String,
}

struct StoredSupplier {
    id: i64,
    name: String,
    legal_name: String,
    tax_id: String,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Default)]
struct MemoryInner {
    clients: Vec<StoredClient>,
    suppliers: Vec<StoredSupplier>,
}

#[derive(Clone, Default)]
struct MemoryRegistry {
    inner: Arc<Mutex<MemoryInner>>,
}

impl ClientRepository for MemoryRegistry {
    async fn insert(&self, client: &NewClient) -> RegistryResult<ClientId> {
        let mut inner = self.inner.lock().unwrap();

        // Stand-in for the store's unique indexes
        let collides = inner.clients.iter().any(|c| {
            c.email == client.email.as_str() || c.national_id == client.national_id.as_str()
        });
        if collides {
            return Err(RegistryError::DuplicateRecord);
        }

        let id = inner.clients.len() as i64 + 1;
        inner.clients.push(StoredClient {
            id,
            name: client.name.clone(),
            email: client.email.as_str().to_string(),
            phone: client.phone.as_str().to_string(),
            address: client.address.clone(),
            gender: client.gender.clone(),
            national_id: client.national_id.as_str().to_string(),
            password_hash: client.password_hash.as_phc_string().to_string(),
        });

        Ok(ClientId::from_i64(id))
    }

    async fn exists_with_email_or_national_id(
        &self,
        email: &Email,
        national_id: &NationalId,
    ) -> RegistryResult<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .clients
            .iter()
            .any(|c| c.email == email.as_str() || c.national_id == national_id.as_str()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> RegistryResult<Option<ClientCredentials>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .clients
            .iter()
            .find(|c| c.email == email)
            .map(|c| ClientCredentials {
                id: ClientId::from_i64(c.id),
                name: c.name.clone(),
                password_hash: c.password_hash.clone(),
            }))
    }

    async fn list_summaries(&self) -> RegistryResult<Vec<ClientSummary>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .clients
            .iter()
            .rev()
            .map(|c| ClientSummary {
                id: ClientId::from_i64(c.id),
                name: c.name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
                national_id: c.national_id.clone(),
                gender: c.gender.clone(),
            })
            .collect())
    }
}

impl SupplierRepository for MemoryRegistry {
    async fn insert(&self, supplier: &NewSupplier) -> RegistryResult<SupplierId> {
        let mut inner = self.inner.lock().unwrap();

        if inner.suppliers.iter().any(|s| s.tax_id == supplier.tax_id) {
            return Err(RegistryError::DuplicateTaxId);
        }

        let id = inner.suppliers.len() as i64 + 1;
        inner.suppliers.push(StoredSupplier {
            id,
            name: supplier.name.clone(),
            legal_name: supplier.legal_name.clone(),
            tax_id: supplier.tax_id.clone(),
            email: supplier.email.as_ref().map(|e| e.as_str().to_string()),
            phone: supplier.phone.as_ref().map(|p| p.as_str().to_string()),
        });

        Ok(SupplierId::from_i64(id))
    }

    async fn exists_with_tax_id(&self, tax_id: &str) -> RegistryResult<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.suppliers.iter().any(|s| s.tax_id == tax_id))
    }

    async fn list_summaries(&self) -> RegistryResult<Vec<SupplierSummary>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .suppliers
            .iter()
            .rev()
            .map(|s| SupplierSummary {
                id: SupplierId::from_i64(s.id),
                name: s.name.clone(),
                legal_name: s.legal_name.clone(),
                tax_id: s.tax_id.clone(),
                email: s.email.clone(),
                phone: s.phone.clone(),
            })
            .collect())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn test_config() -> Arc<RegistryConfig> {
    Arc::new(RegistryConfig::development())
}

fn client_input() -> RegisterClientInput {
    RegisterClientInput {
        name: "Alice Smith".to_string(),
        age: "30".to_string(),
        email: "alice@example.com".to_string(),
        phone: "(11) 91234-5678".to_string(),
        address: "1 Main St".to_string(),
        gender: "F".to_string(),
        national_id: "52998224725".to_string(),
        password: "correct horse battery".to_string(),
    }
}

/// Second record with distinct unique keys (both CPFs checksum-valid)
fn other_client_input() -> RegisterClientInput {
    RegisterClientInput {
        name: "Bob Jones".to_string(),
        email: "bob@example.com".to_string(),
        national_id: "11144477735".to_string(),
        ..client_input()
    }
}

fn supplier_input() -> RegisterSupplierInput {
    RegisterSupplierInput {
        name: "Acme".to_string(),
        legal_name: "Acme Ltda".to_string(),
        tax_id: "52998224725".to_string(),
        age: String::new(),
        phone: "(11) 91234-5678".to_string(),
        email: "contact@acme.com".to_string(),
        address: "2 Industrial Ave".to_string(),
        website: "https://acme.example".to_string(),
        service_description: "Logistics".to_string(),
        duration: "12 months".to_string(),
        contract_ref: "C-100".to_string(),
        responsible_party: "Carol".to_string(),
        notes: String::new(),
    }
}

// ============================================================================
// Client registration
// ============================================================================

mod register_client {
    use super::*;

    #[tokio::test]
    async fn test_register_success() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        let id = use_case.execute(client_input()).await.unwrap();
        assert_eq!(id.as_i64(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        let input = RegisterClientInput {
            address: String::new(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::MissingFields));
    }

    #[tokio::test]
    async fn test_field_that_sanitizes_to_empty_is_missing() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        // Semicolons are stripped, leaving only whitespace to trim away
        let input = RegisterClientInput {
            gender: " ;; ".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::MissingFields));
    }

    #[tokio::test]
    async fn test_age_coercion_failure() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        let input = RegisterClientInput {
            age: "thirty".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidField("age")));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        let input = RegisterClientInput {
            email: "not-an-email".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidField("email")));
    }

    #[tokio::test]
    async fn test_invalid_phone_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        let input = RegisterClientInput {
            phone: "123".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidField("phone")));
    }

    #[tokio::test]
    async fn test_invalid_national_id_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        let input = RegisterClientInput {
            national_id: "52998224724".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidField("national ID")));
    }

    #[tokio::test]
    async fn test_email_rule_fails_first() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        // Email, phone and national ID all invalid; email short-circuits
        let input = RegisterClientInput {
            email: "bad".to_string(),
            phone: "123".to_string(),
            national_id: "111".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidField("email")));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        use_case.execute(client_input()).await.unwrap();

        // Same email, different national ID
        let input = RegisterClientInput {
            national_id: "11144477735".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRecord));
    }

    #[tokio::test]
    async fn test_duplicate_national_id_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo, test_config());

        use_case.execute(client_input()).await.unwrap();

        // Same national ID, different email
        let input = RegisterClientInput {
            email: "bob@example.com".to_string(),
            ..client_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRecord));
    }

    #[tokio::test]
    async fn test_stored_fields_are_sanitized() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo.clone(), test_config());

        let input = RegisterClientInput {
            name: "  <Alice>  ".to_string(),
            ..client_input()
        };
        use_case.execute(input).await.unwrap();

        let inner = repo.inner.lock().unwrap();
        assert_eq!(inner.clients[0].name, "&ltAlice&gt");
    }

    #[tokio::test]
    async fn test_password_is_hashed_not_stored() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterClientUseCase::new(repo.clone(), test_config());

        use_case.execute(client_input()).await.unwrap();

        let inner = repo.inner.lock().unwrap();
        let stored = &inner.clients[0].password_hash;
        assert!(stored.starts_with("$argon2id$"));
        assert!(!stored.contains("correct horse battery"));
    }
}

// ============================================================================
// Login
// ============================================================================

mod login_client {
    use super::*;

    async fn seeded_repo(config: Arc<RegistryConfig>) -> Arc<MemoryRegistry> {
        let repo = Arc::new(MemoryRegistry::default());
        RegisterClientUseCase::new(repo.clone(), config)
            .execute(client_input())
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_login_success_produces_marker() {
        let config = test_config();
        let repo = seeded_repo(config.clone()).await;
        let use_case = LoginClientUseCase::new(repo, config);

        let marker = use_case
            .execute(LoginClientInput {
                email: "alice@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(marker.client_id.as_i64(), 1);
        assert_eq!(marker.client_name, "Alice Smith");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let config = test_config();
        let repo = seeded_repo(config.clone()).await;
        let use_case = LoginClientUseCase::new(repo, config);

        let unknown = use_case
            .execute(LoginClientInput {
                email: "nobody@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap_err();

        let wrong = use_case
            .execute(LoginClientInput {
                email: "alice@example.com".to_string(),
                password: "wrong password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(unknown, RegistryError::InvalidCredentials));
        assert!(matches!(wrong, RegistryError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_empty_password_is_invalid_credentials() {
        let config = test_config();
        let repo = seeded_repo(config.clone()).await;
        let use_case = LoginClientUseCase::new(repo, config);

        let err = use_case
            .execute(LoginClientInput {
                email: "alice@example.com".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidCredentials));
    }
}

// ============================================================================
// Listing
// ============================================================================

mod list_clients {
    use super::*;

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let config = test_config();
        let repo = Arc::new(MemoryRegistry::default());
        let register = RegisterClientUseCase::new(repo.clone(), config);

        let first = register.execute(client_input()).await.unwrap();
        let second = register.execute(other_client_input()).await.unwrap();

        let summaries = ListClientsUseCase::new(repo).execute().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, second);
        assert_eq!(summaries[1].id, first);
    }

    #[tokio::test]
    async fn test_listing_never_carries_password_material() {
        let config = test_config();
        let repo = Arc::new(MemoryRegistry::default());
        RegisterClientUseCase::new(repo.clone(), config)
            .execute(client_input())
            .await
            .unwrap();

        let summaries = ListClientsUseCase::new(repo).execute().await.unwrap();
        let body = serde_json::to_value(&summaries).unwrap();

        let entry = &body[0];
        assert_eq!(entry["email"], "alice@example.com");
        assert!(entry.get("password").is_none());
        assert!(entry.get("password_hash").is_none());
    }
}

// ============================================================================
// Suppliers
// ============================================================================

mod suppliers {
    use super::*;

    #[tokio::test]
    async fn test_register_supplier_success() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterSupplierUseCase::new(repo);

        let id = use_case.execute(supplier_input()).await.unwrap();
        assert_eq!(id.as_i64(), 1);
    }

    #[tokio::test]
    async fn test_supplier_requires_name_legal_name_tax_id() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterSupplierUseCase::new(repo);

        let input = RegisterSupplierInput {
            tax_id: String::new(),
            ..supplier_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::MissingFields));
    }

    #[tokio::test]
    async fn test_supplier_optional_email_validated_when_present() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterSupplierUseCase::new(repo);

        let input = RegisterSupplierInput {
            email: "not-an-email".to_string(),
            ..supplier_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidField("email")));
    }

    #[tokio::test]
    async fn test_supplier_optional_fields_may_be_absent() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterSupplierUseCase::new(repo.clone());

        let input = RegisterSupplierInput {
            age: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            website: String::new(),
            service_description: String::new(),
            duration: String::new(),
            contract_ref: String::new(),
            responsible_party: String::new(),
            notes: String::new(),
            ..supplier_input()
        };

        use_case.execute(input).await.unwrap();

        let inner = repo.inner.lock().unwrap();
        assert_eq!(inner.suppliers[0].email, None);
        assert_eq!(inner.suppliers[0].phone, None);
    }

    #[tokio::test]
    async fn test_duplicate_tax_id_rejected() {
        let repo = Arc::new(MemoryRegistry::default());
        let use_case = RegisterSupplierUseCase::new(repo);

        use_case.execute(supplier_input()).await.unwrap();

        let input = RegisterSupplierInput {
            name: "Other".to_string(),
            ..supplier_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTaxId));
    }

    #[tokio::test]
    async fn test_supplier_listing_is_newest_first() {
        let repo = Arc::new(MemoryRegistry::default());
        let register = RegisterSupplierUseCase::new(repo.clone());

        register.execute(supplier_input()).await.unwrap();
        register
            .execute(RegisterSupplierInput {
                name: "Beta".to_string(),
                tax_id: "11144477735".to_string(),
                ..supplier_input()
            })
            .await
            .unwrap();

        let summaries = ListSuppliersUseCase::new(repo).execute().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Beta");
        assert_eq!(summaries[1].name, "Acme");
    }
}
