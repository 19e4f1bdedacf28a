use super::{
    ConfigError, DatabaseConfig, LoggingConfig, RateLimitConfig, ServerConfig, TelemetryConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
    pub proxy_port: Option<u16>,
    pub admin_port: Option<u16>,
    pub proxy_ip: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

const DEFAULT_CONFIG_PATHS: &[&str] = &["sitegate.toml", "/etc/sitegate/config.toml"];

impl Config {
    /// Loads the config file (explicit path, then well-known locations, then
    /// defaults) and applies CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match DEFAULT_CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
                Some(found) => Self::from_file(found)?,
                None => Self::default(),
            },
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.proxy_port {
            self.server.proxy_port = port;
        }
        if let Some(port) = overrides.admin_port {
            self.server.admin_port = port;
        }
        if let Some(ip) = overrides.proxy_ip {
            self.server.proxy_ip = ip;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr(self.server.dns_port)?;

        if self.server.proxy_ip.parse::<std::net::Ipv4Addr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "proxy_ip must be an IPv4 address: {}",
                self.server.proxy_ip
            )));
        }

        let ports = [
            self.server.dns_port,
            self.server.proxy_port,
            self.server.admin_port,
        ];
        if ports.contains(&0) {
            return Err(ConfigError::Validation("Ports must be non-zero".to_string()));
        }
        if self.server.proxy_port == self.server.admin_port {
            return Err(ConfigError::Validation(
                "proxy_port and admin_port must differ".to_string(),
            ));
        }

        if self.rate_limit.limit == 0 || self.rate_limit.window_secs == 0 {
            return Err(ConfigError::Validation(
                "rate_limit.limit and rate_limit.window_secs must be positive".to_string(),
            ));
        }

        if self.telemetry.queue_capacity == 0 || self.telemetry.batch_size == 0 {
            return Err(ConfigError::Validation(
                "telemetry.queue_capacity and telemetry.batch_size must be positive".to_string(),
            ));
        }
        if self.telemetry.flush_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "telemetry.flush_interval_ms must be positive".to_string(),
            ));
        }

        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                other
            ))),
        }
    }
}
