//! Configuration settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::github::{GitHubClientConfig, GITHUB_API_BASE};
use crate::domain::models::LabelSpec;
use crate::infrastructure::logging::LogConfig;

/// Main configuration structure for coverage-sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// GitHub API connection settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Tracking label applied to every coverage issue
    #[serde(default)]
    pub label: LabelSpec,

    /// Sync behaviour
    #[serde(default)]
    pub sync: SyncConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// GitHub API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// REST API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Issues per page when listing (1-100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_api_base() -> String {
    GITHUB_API_BASE.to_string()
}

fn default_user_agent() -> String {
    "ospa-coverage-issue-bot".to_string()
}

const fn default_per_page() -> u32 {
    100
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            per_page: default_per_page(),
        }
    }
}

impl GitHubConfig {
    /// Client settings for this configuration and the given token.
    pub fn client_config(&self, token: String) -> GitHubClientConfig {
        GitHubClientConfig {
            token,
            api_base: self.api_base.clone(),
            user_agent: self.user_agent.clone(),
            per_page: self.per_page,
        }
    }
}

/// Sync behaviour configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SyncConfig {
    /// Registry source file, relative to the repository root
    #[serde(default = "default_registry_path")]
    pub registry_path: PathBuf,

    /// Pause after each created issue, in milliseconds
    #[serde(default = "default_write_delay_ms")]
    pub write_delay_ms: u64,
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("cmd/scaffold/internal/registry/registry.go")
}

const fn default_write_delay_ms() -> u64 {
    250
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            registry_path: default_registry_path(),
            write_delay_ms: default_write_delay_ms(),
        }
    }
}

impl SyncConfig {
    /// Pause after each created issue.
    pub const fn write_delay(&self) -> Duration {
        Duration::from_millis(self.write_delay_ms)
    }
}
