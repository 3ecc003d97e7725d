//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "coverage-sync")]
#[command(
    about = "Create one GitHub issue per OpenStack service/resource missing from the tracker",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Sync arguments.
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Configuration file (defaults to ./.coverage-sync.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Arguments of a sync run.
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// GitHub repo in form "owner/name"
    #[arg(long)]
    pub repo: String,

    /// Path to the OpenStack service registry file, relative to --repo-root
    #[arg(long)]
    pub registry_path: Option<PathBuf>,

    /// Root of the auditor repository checkout
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Print actions without writing to GitHub
    #[arg(long)]
    pub dry_run: bool,
}
