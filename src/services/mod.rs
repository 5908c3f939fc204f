pub mod api_client;
pub mod auth_service;
pub mod credential_service;

pub use api_client::{ApiClient, ImageApi};
pub use auth_service::{ConfiguredAuthority, TokenAuthority};
pub use credential_service::CredentialStore;
