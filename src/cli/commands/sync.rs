//! Implementation of the sync run.
//!
//! Pre-flight checks (token, repo argument, registry file) run before any
//! network call and fail with [`CliError`]. After that the registry is
//! parsed and handed to the [`Reconciler`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::fs;

use crate::adapters::github::GitHubClient;
use crate::adapters::FsRepoSignals;
use crate::cli::output::{output, CommandOutput};
use crate::cli::{CliError, SyncArgs};
use crate::domain::models::{RepoSlug, SyncSummary};
use crate::infrastructure::config::Config;
use crate::services::{parse_registry, Reconciler, ReconcilerOptions};

impl CommandOutput for SyncSummary {
    fn to_human(&self) -> String {
        self.summary_line()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Everything the run needs once pre-flight checks have passed.
#[derive(Debug)]
pub struct Preflight {
    /// Trimmed GitHub token.
    pub token: String,
    /// Parsed `--repo`.
    pub repo: RepoSlug,
    /// Registry file, resolved against `--repo-root`.
    pub registry_path: PathBuf,
}

/// Validate the environment and arguments without touching the network.
///
/// Checks run in a fixed order: token, repo argument, registry file.
pub fn preflight(args: &SyncArgs, config: &Config, token: Option<String>) -> Result<Preflight, CliError> {
    let token = token.ok_or(CliError::MissingToken)?;
    let repo: RepoSlug = args.repo.parse()?;

    let relative = args
        .registry_path
        .clone()
        .unwrap_or_else(|| config.sync.registry_path.clone());
    let registry_path = args.repo_root.join(relative);
    if !registry_path.is_file() {
        return Err(CliError::RegistryNotFound(registry_path));
    }

    Ok(Preflight {
        token,
        repo,
        registry_path,
    })
}

/// Run a full sync and return its summary without printing it.
pub async fn run(args: &SyncArgs, config: &Config, token: Option<String>) -> Result<SyncSummary> {
    let Preflight {
        token,
        repo,
        registry_path,
    } = preflight(args, config, token)?;

    let source = fs::read_to_string(&registry_path)
        .await
        .with_context(|| format!("failed to read registry {}", registry_path.display()))?;
    let resources = parse_registry(&source)?;
    tracing::info!(
        registry = %registry_path.display(),
        resources = resources.len(),
        "parsed coverage registry"
    );

    let client = GitHubClient::new(config.github.client_config(token), repo.clone())?;
    let reconciler = Reconciler::new(
        Arc::new(client),
        Arc::new(FsRepoSignals::new(args.repo_root.clone())),
        ReconcilerOptions {
            repo,
            label: config.label.clone(),
            dry_run: args.dry_run,
            write_delay: config.sync.write_delay(),
        },
    );

    let summary = reconciler.sync(&resources).await?;
    Ok(summary)
}

/// Execute the sync command and print the summary line.
pub async fn execute(args: SyncArgs, config: &Config, json_mode: bool) -> Result<()> {
    let summary = run(&args, config, GitHubClient::token_from_env()).await?;
    output(&summary, json_mode);
    Ok(())
}
