//! Layered configuration loading.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use super::settings::Config;
use crate::infrastructure::logging::logger::parse_log_level;

/// Project config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = ".coverage-sync.yaml";

/// Prefix for environment overrides, e.g. `COVERAGE_SYNC_SYNC__WRITE_DELAY_MS=0`.
pub const ENV_PREFIX: &str = "COVERAGE_SYNC_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `github.api_base` is empty.
    #[error("GitHub API base URL cannot be empty")]
    EmptyApiBase,

    /// `github.per_page` is outside 1..=100.
    #[error("Invalid per_page: {0}. Must be between 1 and 100")]
    InvalidPerPage(u32),

    /// `label.name` is empty.
    #[error("Label name cannot be empty")]
    EmptyLabelName,

    /// `label.color` is not six hex digits.
    #[error("Invalid label color: {0:?}. Must be six hex digits without '#'")]
    InvalidLabelColor(String),

    /// `logging.level` is not a tracing level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `sync.registry_path` is empty.
    #[error("Registry path cannot be empty")]
    EmptyRegistryPath,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `explicit` file if given, otherwise `.coverage-sync.yaml` (optional)
    /// 3. Environment variables (`COVERAGE_SYNC_*` prefix, `__` for nesting)
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let file = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if let Some(path) = explicit {
            if !path.is_file() {
                anyhow::bail!("config file not found: {}", path.display());
            }
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load configuration (file: {})", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.github.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }

        if config.github.per_page == 0 || config.github.per_page > 100 {
            return Err(ConfigError::InvalidPerPage(config.github.per_page));
        }

        if config.label.name.trim().is_empty() {
            return Err(ConfigError::EmptyLabelName);
        }

        let color = &config.label.color;
        if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidLabelColor(color.clone()));
        }

        if config.sync.registry_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRegistryPath);
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
