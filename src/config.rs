//! Configuration for the order pipeline.
//!
//! Supports a YAML file and environment variable overrides.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV_VAR: &str = "ORDER_PIPELINE_CONFIG";

/// Pipeline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where each service binds and what name it registers under.
    pub services: ServicesConfig,
    /// RPC settings.
    pub transport: TransportConfig,
    /// Resource actor settings.
    pub actors: ActorConfig,
}

/// The three services.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub user: ServiceEndpointConfig,
    pub menu: ServiceEndpointConfig,
    pub order: ServiceEndpointConfig,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            user: ServiceEndpointConfig::new("user-service", 50051),
            menu: ServiceEndpointConfig::new("menu-service", 50052),
            order: ServiceEndpointConfig::new("order-service", 50053),
        }
    }
}

/// One service's registry name and bind address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceEndpointConfig {
    pub name: String,
    pub address: String,
    pub port: u16,
}

impl ServiceEndpointConfig {
    fn new(name: &str, port: u16) -> Self {
        Self {
            name: name.to_string(),
            address: "127.0.0.1".to_string(),
            port,
        }
    }

    /// Applies a `host:port` override. Returns false and changes nothing if it does
    /// not parse.
    fn set_endpoint(&mut self, endpoint: &str) -> bool {
        match parse_endpoint(endpoint) {
            Some((address, port)) => {
                self.address = address;
                self.port = port;
                true
            }
            None => false,
        }
    }
}

/// RPC settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Upper bound on a single call, in milliseconds.
    pub call_timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 5000,
        }
    }
}

impl TransportConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

/// Resource actor settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Mailbox capacity of every resource actor.
    pub mailbox_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { mailbox_size: 32 }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV_VAR).unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would fail later at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.mailbox_size == 0 {
            return Err(ConfigError::Invalid(
                "actors.mailbox_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides. Malformed values are logged and ignored.
    fn apply_env_overrides(&mut self) {
        let endpoints = [
            ("USER_SERVICE_ADDR", &mut self.services.user),
            ("MENU_SERVICE_ADDR", &mut self.services.menu),
            ("ORDER_SERVICE_ADDR", &mut self.services.order),
        ];
        for (var, service) in endpoints {
            if let Ok(endpoint) = std::env::var(var) {
                if !service.set_endpoint(&endpoint) {
                    warn!(
                        var,
                        value = %endpoint,
                        "Ignoring malformed endpoint, expected host:port"
                    );
                }
            }
        }

        if let Ok(timeout) = std::env::var("RPC_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => self.transport.call_timeout_ms = ms,
                Err(_) => {
                    warn!(var = "RPC_TIMEOUT_MS", value = %timeout, "Ignoring malformed timeout")
                }
            }
        }

        if let Ok(size) = std::env::var("MAILBOX_SIZE") {
            match size.parse::<usize>() {
                Ok(n) if n > 0 => self.actors.mailbox_size = n,
                _ => warn!(
                    var = "MAILBOX_SIZE",
                    value = %size,
                    "Ignoring mailbox size, expected a positive integer"
                ),
            }
        }
    }
}

/// Splits `host:port`.
fn parse_endpoint(endpoint: &str) -> Option<(String, u16)> {
    let (host, port) = endpoint.rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    Some((host.to_string(), port.parse().ok()?))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
