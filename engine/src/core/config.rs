//! Application configuration
//!
//! Merges CLI flags and environment bindings over built-in defaults. There
//! is no config file: the engine is a client, the only tunables are where
//! the API lives and how long to wait for it.

use std::time::Duration;

use super::cli::Cli;
use super::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn load(cli: &Cli) -> Self {
        let base_url = cli
            .api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = Duration::from_secs(cli.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        Self {
            api: ApiConfig { base_url, timeout },
        }
    }
}
