//! Shared application state

use std::sync::Arc;

use crate::lifecycle::LifecycleController;
use crate::store::StoreBackend;
use crate::validation::ValidationPolicy;

/// State handed to every request handler
pub struct AppState {
    pub controller: LifecycleController,
}

impl AppState {
    pub fn new(controller: LifecycleController) -> Self {
        Self { controller }
    }

    /// State over `backend` with the given submission policy
    pub fn with_backend(backend: Arc<dyn StoreBackend>, policy: ValidationPolicy) -> Self {
        Self::new(LifecycleController::with_policy(backend, policy))
    }
}
