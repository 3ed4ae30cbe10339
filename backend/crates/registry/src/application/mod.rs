//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod list_clients;
pub mod list_suppliers;
pub mod login_client;
pub mod register_client;
pub mod register_supplier;

// Re-exports
pub use config::RegistryConfig;
pub use list_clients::ListClientsUseCase;
pub use list_suppliers::ListSuppliersUseCase;
pub use login_client::{LoginClientInput, LoginClientUseCase};
pub use register_client::{RegisterClientInput, RegisterClientUseCase};
pub use register_supplier::{RegisterSupplierInput, RegisterSupplierUseCase};
