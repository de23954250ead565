use std::sync::Arc;

use meddx_aivm::SecureInference;
use meddx_translate::Translator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The
/// collaborators are trait objects so integration tests can inject
/// deterministic fakes. Nothing here is mutable: per-request handlers
/// share no in-process state with each other.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Secure inference service (AIVM).
    pub inference: Arc<dyn SecureInference>,
    /// Translation service.
    pub translator: Arc<dyn Translator>,
}
