//! PostgreSQL Repository Implementations
//!
//! Creation timestamps are assigned by the store (`DEFAULT now()`), so
//! inserts never bind them. Unique-index violations (SQLSTATE 23505) on
//! insert are translated to the domain's duplicate errors right here:
//! the pre-insert existence checks are only a fast path, and a
//! concurrent duplicate must produce the same response as one the fast
//! path caught.

use sqlx::PgPool;

use kernel::id::{ClientId, SupplierId};

use crate::domain::entity::{
    client::{ClientCredentials, ClientSummary, NewClient},
    supplier::{NewSupplier, SupplierSummary},
};
use crate::domain::repository::{ClientRepository, SupplierRepository};
use crate::domain::value_object::{Email, NationalId};
use crate::error::{RegistryError, RegistryResult};

/// PostgreSQL unique-violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed registry repository
#[derive(Clone)]
pub struct PgRegistryRepository {
    pool: PgPool,
}

impl PgRegistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}

// ============================================================================
// Client Repository Implementation
// ============================================================================

#[derive(sqlx::FromRow)]
struct ClientSummaryRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    national_id: String,
    gender: String,
}

impl ClientSummaryRow {
    fn into_summary(self) -> ClientSummary {
        ClientSummary {
            id: ClientId::from_i64(self.id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            national_id: self.national_id,
            gender: self.gender,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClientCredentialsRow {
    id: i64,
    name: String,
    password_hash: String,
}

impl ClientRepository for PgRegistryRepository {
    async fn insert(&self, client: &NewClient) -> RegistryResult<ClientId> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clients (
                name,
                age,
                email,
                phone,
                address,
                gender,
                national_id,
                password_hash
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&client.name)
        .bind(client.age)
        .bind(client.email.as_str())
        .bind(client.phone.as_str())
        .bind(&client.address)
        .bind(&client.gender)
        .bind(client.national_id.as_str())
        .bind(client.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(ClientId::from_i64(id)),
            Err(e) if is_unique_violation(&e) => Err(RegistryError::DuplicateRecord),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists_with_email_or_national_id(
        &self,
        email: &Email,
        national_id: &NationalId,
    ) -> RegistryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE email = $1 OR national_id = $2)",
        )
        .bind(email.as_str())
        .bind(national_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> RegistryResult<Option<ClientCredentials>> {
        let row = sqlx::query_as::<_, ClientCredentialsRow>(
            r#"
            SELECT
                id,
                name,
                password_hash
            FROM clients
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| ClientCredentials {
            id: ClientId::from_i64(r.id),
            name: r.name,
            password_hash: r.password_hash,
        }))
    }

    async fn list_summaries(&self) -> RegistryResult<Vec<ClientSummary>> {
        let rows = sqlx::query_as::<_, ClientSummaryRow>(
            r#"
            SELECT
                id,
                name,
                email,
                phone,
                national_id,
                gender
            FROM clients
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClientSummaryRow::into_summary).collect())
    }
}

// ============================================================================
// Supplier Repository Implementation
// ============================================================================

#[derive(sqlx::FromRow)]
struct SupplierSummaryRow {
    id: i64,
    name: String,
    legal_name: String,
    tax_id: String,
    email: Option<String>,
    phone: Option<String>,
}

impl SupplierSummaryRow {
    fn into_summary(self) -> SupplierSummary {
        SupplierSummary {
            id: SupplierId::from_i64(self.id),
            name: self.name,
            legal_name: self.legal_name,
            tax_id: self.tax_id,
            email: self.email,
            phone: self.phone,
        }
    }
}

impl SupplierRepository for PgRegistryRepository {
    async fn insert(&self, supplier: &NewSupplier) -> RegistryResult<SupplierId> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO suppliers (
                name,
                legal_name,
                tax_id,
                age,
                phone,
                email,
                address,
                website,
                service_description,
                duration,
                contract_ref,
                responsible_party,
                notes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&supplier.name)
        .bind(&supplier.legal_name)
        .bind(&supplier.tax_id)
        .bind(supplier.age)
        .bind(supplier.phone.as_ref().map(|p| p.as_str()))
        .bind(supplier.email.as_ref().map(|e| e.as_str()))
        .bind(&supplier.address)
        .bind(&supplier.website)
        .bind(&supplier.service_description)
        .bind(&supplier.duration)
        .bind(&supplier.contract_ref)
        .bind(&supplier.responsible_party)
        .bind(&supplier.notes)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(SupplierId::from_i64(id)),
            Err(e) if is_unique_violation(&e) => Err(RegistryError::DuplicateTaxId),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists_with_tax_id(&self, tax_id: &str) -> RegistryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE tax_id = $1)",
        )
        .bind(tax_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list_summaries(&self) -> RegistryResult<Vec<SupplierSummary>> {
        let rows = sqlx::query_as::<_, SupplierSummaryRow>(
            r#"
            SELECT
                id,
                name,
                legal_name,
                tax_id,
                email,
                phone
            FROM suppliers
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SupplierSummaryRow::into_summary).collect())
    }
}
