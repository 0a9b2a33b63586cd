use std::env;

use url::Url;

use super::error::ConfigError;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    pub public_base_url: Option<String>,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - PUBLIC_BASE_URL: Externally visible origin used in share links and
    ///   `Location` headers (default: "http://<SERVICE_IP>:<SERVICE_PORT>")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Self {
            ip,
            port,
            public_base_url,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn public_base_url(&self) -> Result<Url, ConfigError> {
        let raw = match &self.public_base_url {
            Some(url) => url.clone(),
            None => format!("http://{}", self.bind_address()),
        };
        let url = Url::parse(&raw).map_err(|_| ConfigError::InvalidVariable("PUBLIC_BASE_URL"))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidVariable("PUBLIC_BASE_URL"));
        }
        Ok(url)
    }
}
