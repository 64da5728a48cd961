pub mod app_config;
pub mod backend_client;
#[cfg(any(test, feature = "testing"))]
pub mod memory_repo;

pub use backend_client::BackendClient;
#[cfg(any(test, feature = "testing"))]
pub use memory_repo::InMemoryBackend;
