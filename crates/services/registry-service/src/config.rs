//! Registry service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Registry service configuration.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Listener and request settings
    pub service: ServiceConfig,
    /// Connection pool settings
    pub database: DatabaseConfig,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let service_defaults = ServiceConfig::default();
        let database_defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                service_name: "registry-service".to_string(),
                host: env::var("REGISTRY_HOST").unwrap_or(service_defaults.host),
                port: parse_env("REGISTRY_PORT").unwrap_or(service_defaults.port),
                request_timeout_seconds: parse_env("REQUEST_TIMEOUT_SECONDS")
                    .unwrap_or(service_defaults.request_timeout_seconds),
            },
            database: DatabaseConfig {
                url: env::var("REGISTRY_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(database_defaults.url),
                max_connections: parse_env("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(database_defaults.max_connections),
                min_connections: parse_env("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(database_defaults.min_connections),
                connect_timeout_seconds: parse_env("DATABASE_CONNECT_TIMEOUT_SECONDS")
                    .unwrap_or(database_defaults.connect_timeout_seconds),
            },
        }
    }

    /// Override the listen address, as given on the command line.
    pub fn with_listen_addr(mut self, host: String, port: u16) -> Self {
        self.service.host = host;
        self.service.port = port;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "registry-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
