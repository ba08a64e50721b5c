//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::UserRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create new app state around an injected registry.
    pub fn new(registry: Arc<dyn UserRepository>) -> Self {
        Self { registry }
    }
}
