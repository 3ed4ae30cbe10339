//! Registry Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use platform::rate_limit::{RateLimitConfig, SlidingWindowLimiter};

use crate::application::config::RegistryConfig;
use crate::domain::repository::{ClientRepository, SupplierRepository};
use crate::infra::postgres::PgRegistryRepository;
use crate::presentation::handlers::{self, RegistryAppState};
use crate::presentation::middleware::{AdmissionState, require_admission};

/// Create the registry router with the PostgreSQL repository
///
/// The limiter arrives from the caller so its lifetime (and any
/// periodic cleanup task) is owned by the process, not the router.
pub fn registry_router(
    repo: PgRegistryRepository,
    config: RegistryConfig,
    limiter: Arc<SlidingWindowLimiter>,
) -> Router {
    registry_router_generic(repo, config, limiter)
}

/// Create a registry router for any repository implementation
pub fn registry_router_generic<R>(
    repo: R,
    config: RegistryConfig,
    limiter: Arc<SlidingWindowLimiter>,
) -> Router
where
    R: ClientRepository + SupplierRepository + Clone + Send + Sync + 'static,
{
    let state = RegistryAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let limits = state.config.limits.clone();

    let admit = |quota: RateLimitConfig| {
        middleware::from_fn_with_state(
            AdmissionState {
                limiter: limiter.clone(),
                quota,
            },
            require_admission,
        )
    };

    Router::new()
        .route(
            "/register-client",
            post(handlers::register_client::<R>).layer(admit(limits.register.clone())),
        )
        .route(
            "/clients",
            get(handlers::list_clients::<R>).layer(admit(limits.list.clone())),
        )
        .route(
            "/login-client",
            post(handlers::login_client::<R>).layer(admit(limits.login.clone())),
        )
        .route("/logout-client", post(handlers::logout_client::<R>))
        .route(
            "/register-supplier",
            post(handlers::register_supplier::<R>).layer(admit(limits.register)),
        )
        .route(
            "/suppliers",
            get(handlers::list_suppliers::<R>).layer(admit(limits.list)),
        )
        .with_state(state)
}
