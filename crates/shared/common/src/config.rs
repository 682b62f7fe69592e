//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Load from `{PREFIX}_HOST`, `{PREFIX}_PORT` and `LOG_LEVEL`, falling back
    /// to the defaults for anything missing or unparsable.
    pub fn from_env(service_name: &str, prefix: &str) -> Self {
        let defaults = Self {
            service_name: service_name.to_string(),
            ..Self::default()
        };

        Self {
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            service_name: defaults.service_name,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}
