use aerodesk_core::Backend;
use std::sync::Arc;

/// Shared by every handler. Views are rebuilt per request, so the backend
/// handle is the only thing held here.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    /// Appended to connection-error banners.
    pub backend_hint: String,
}
