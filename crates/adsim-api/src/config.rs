use adsim_types::{AdSimError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const HOST_ENV: &str = "ADSIM_API_HOST";
pub const PORT_ENV: &str = "ADSIM_API_PORT";

/// Configuration for the HTTP API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Allow any origin (browser front-ends served elsewhere)
    pub permissive_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            permissive_cors: true,
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `ADSIM_API_HOST` / `ADSIM_API_PORT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_ENV) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| AdSimError::Config(format!("{PORT_ENV}={port} is not a valid port")))?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AdSimError::Config(format!("bad bind address {}:{}: {e}", self.host, self.port)))
    }
}
