use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Port of the reverse proxy front-end
    #[serde(default = "default_proxy_port")]
    pub proxy_port: u16,

    /// Port of the admin REST API
    #[serde(default = "default_admin_port")]
    pub admin_port: u16,

    /// Address returned in A answers for site names (the proxy's public IP)
    #[serde(default = "default_proxy_ip")]
    pub proxy_ip: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_proxy_port() -> u16 {
    8080
}

fn default_admin_port() -> u16 {
    8081
}

fn default_proxy_ip() -> String {
    "127.0.0.1".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            proxy_port: default_proxy_port(),
            admin_port: default_admin_port(),
            proxy_ip: default_proxy_ip(),
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Listener address for `port` on the configured bind address.
    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, port))
    }
}
