//! Server settings read from `SEOLENS_*` environment variables.

use std::net::SocketAddr;

use anyhow::Context;
use config::{Config, Environment};
use seolens_core::fetch::DEFAULT_TIMEOUT_SECS;
use serde::Deserialize;

const ENV_PREFIX: &str = "SEOLENS";

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (`SEOLENS_HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`SEOLENS_PORT`, default `5000`).
    pub port: u16,
    /// Outbound page timeout in seconds (`SEOLENS_TIMEOUT`, default 10).
    #[serde(rename = "timeout")]
    pub fetch_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 5000, fetch_timeout: DEFAULT_TIMEOUT_SECS }
    }
}

impl ServerConfig {
    /// Reads the process environment. Unset variables keep their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Reads `SEOLENS_*` keys from `vars` instead of the process environment.
    pub fn from_vars(vars: config::Map<String, String>) -> anyhow::Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(environment: Environment) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(environment.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("invalid {ENV_PREFIX}_* configuration"))
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
