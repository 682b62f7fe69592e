//! Gateway configuration.

use std::env;

use common::ServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host, port and log level
    pub service: ServiceConfig,
    /// Origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env("gateway", "GATEWAY"),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    /// Override host and port, as given on the command line.
    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.service.host = host.into();
        self.service.port = port;
        self
    }

    /// Socket address string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "gateway".to_string(),
                ..ServiceConfig::default()
            },
            cors_allowed_origin: None,
        }
    }
}
