//! Runtime configuration.
//!
//! Values are layered, later sources winning: built-in defaults, an optional
//! `fintrack.toml` in the working directory, then `FINTRACK_*` environment
//! variables (a `.env` file is loaded into the environment first).
//! Command-line flags are applied on top by the CLI.

use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://fintrack.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE: &str = "fintrack";
const ENV_PREFIX: &str = "FINTRACK";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub request_timeout_secs: u64,
    /// Apply pending migrations when the database is first opened
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Loads `.env`, `fintrack.toml` and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_sources(CONFIG_FILE, ENV_PREFIX)
            .context("Failed to load configuration")?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    fn from_sources(file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("auto_migrate", false)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            auto_migrate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::from_sources("does-not-exist", "FINTRACK_TEST_UNSET").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("fintrack-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "bind_address = \"127.0.0.1:8080\"\nauto_migrate = true\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let file = path.with_extension("");
        let config =
            AppConfig::from_sources(file.to_str().unwrap(), "FINTRACK_TEST_UNSET").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert!(config.auto_migrate);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
