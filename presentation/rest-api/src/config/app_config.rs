use super::{
    cors_config, error::ConfigError, security_config::SecurityConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;
use url::Url;

pub struct AppConfig {
    pub server: ServerConfig,
    pub public_base_url: Url,
    pub security: SecurityConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig::from_env();
        let public_base_url = server.public_base_url()?;

        Ok(Self {
            server,
            public_base_url,
            security: SecurityConfig::from_env(),
            cors: cors_config::init_cors(),
        })
    }
}
