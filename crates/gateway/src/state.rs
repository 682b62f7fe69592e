//! Application state for dependency injection.

use std::sync::Arc;

use signup_service_lib::service::SignupService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub signup_service: Arc<dyn SignupService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(signup_service: Arc<dyn SignupService>, config: GatewayConfig) -> Self {
        Self {
            signup_service,
            config,
        }
    }
}
