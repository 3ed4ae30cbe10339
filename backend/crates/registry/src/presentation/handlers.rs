//! HTTP Handlers
//!
//! Thin translation between the wire and the use cases: extract form
//! fields, run the use case, shape the response. All policy lives in
//! the application layer; all admission control lives in the
//! middleware.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::crypto::{hmac_sha256, to_base64_url};

use crate::application::config::RegistryConfig;
use crate::application::{
    ListClientsUseCase, ListSuppliersUseCase, LoginClientInput, LoginClientUseCase,
    RegisterClientInput, RegisterClientUseCase, RegisterSupplierInput, RegisterSupplierUseCase,
};
use crate::domain::entity::session_marker::SessionMarker;
use crate::domain::repository::{ClientRepository, SupplierRepository};
use crate::error::RegistryResult;
use crate::presentation::dto::{
    LoginForm, RegisterClientForm, RegisterSupplierForm, StatusResponse,
};

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<RegistryConfig>,
}

// ============================================================================
// Register Client
// ============================================================================

/// POST /register-client
pub async fn register_client<R>(
    State(state): State<RegistryAppState<R>>,
    Form(form): Form<RegisterClientForm>,
) -> RegistryResult<Json<StatusResponse>>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterClientUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterClientInput {
        name: form.name,
        age: form.age,
        email: form.email,
        phone: form.phone,
        address: form.address,
        gender: form.gender,
        national_id: form.national_id,
        password: form.password,
    };

    use_case.execute(input).await?;

    Ok(Json(StatusResponse::ok("Client registered successfully")))
}

// ============================================================================
// List Clients
// ============================================================================

/// GET /clients
pub async fn list_clients<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<impl IntoResponse>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListClientsUseCase::new(state.repo.clone());
    let summaries = use_case.execute().await?;

    Ok(Json(summaries))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login-client
pub async fn login_client<R>(
    State(state): State<RegistryAppState<R>>,
    Form(form): Form<LoginForm>,
) -> RegistryResult<impl IntoResponse>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginClientUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginClientInput {
        email: form.email,
        password: form.password,
    };

    let marker = use_case.execute(input).await?;

    // The marker travels as a signed cookie; the session mechanism is
    // entirely on this side of the boundary.
    let token = sign_session_marker(&state.config, &marker);
    let cookie = state.config.cookie.build_set_cookie(&token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(StatusResponse::ok("Login successful")),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout-client
pub async fn logout_client<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<impl IntoResponse>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    // The marker is self-contained; clearing the cookie is all there is
    let cookie = state.config.cookie.build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(StatusResponse::ok("Logged out")),
    ))
}

// ============================================================================
// Register Supplier
// ============================================================================

/// POST /register-supplier
pub async fn register_supplier<R>(
    State(state): State<RegistryAppState<R>>,
    Form(form): Form<RegisterSupplierForm>,
) -> RegistryResult<Json<StatusResponse>>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterSupplierUseCase::new(state.repo.clone());

    let input = RegisterSupplierInput {
        name: form.name,
        legal_name: form.legal_name,
        tax_id: form.tax_id,
        age: form.age,
        phone: form.phone,
        email: form.email,
        address: form.address,
        website: form.website,
        service_description: form.service_description,
        duration: form.duration,
        contract_ref: form.contract_ref,
        responsible_party: form.responsible_party,
        notes: form.notes,
    };

    use_case.execute(input).await?;

    Ok(Json(StatusResponse::ok("Supplier registered successfully")))
}

// ============================================================================
// List Suppliers
// ============================================================================

/// GET /suppliers
pub async fn list_suppliers<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<impl IntoResponse>
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSuppliersUseCase::new(state.repo.clone());
    let summaries = use_case.execute().await?;

    Ok(Json(summaries))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Sign a session marker into a cookie-safe token: `<client-id>.<sig>`
fn sign_session_marker(config: &RegistryConfig, marker: &SessionMarker) -> String {
    let client_id = marker.client_id.to_string();
    let signature = hmac_sha256(&config.session_secret, client_id.as_bytes());

    format!("{}.{}", client_id, to_base64_url(&signature))
}
