//! Command-line interface: argument parsing, the sync command, output and
//! exit-code mapping.

pub mod commands;
pub mod output;
pub mod types;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::InvalidRepoSlug;

pub use types::{Cli, SyncArgs};

/// Exit code for a run that failed after pre-flight (parse or remote API).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for pre-flight configuration errors.
pub const EXIT_CONFIG: i32 = 2;

/// Pre-flight errors, detected before any network call.
#[derive(Debug, Error)]
pub enum CliError {
    /// `GITHUB_TOKEN` unset or blank.
    #[error("GITHUB_TOKEN is required (use GitHub Actions built-in token).")]
    MissingToken,

    /// `--repo` is not `owner/name`.
    #[error(transparent)]
    InvalidRepo(#[from] InvalidRepoSlug),

    /// The registry file does not exist.
    #[error("registry not found at {}", .0.display())]
    RegistryNotFound(PathBuf),

    /// Config file, environment overrides or logging setup are invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Exit code for an error returned by a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<CliError>().is_some() {
        EXIT_CONFIG
    } else {
        EXIT_FAILURE
    }
}

/// Report `err` on stderr and terminate the process with its exit code.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let code = exit_code(&err);
    if json_mode {
        let payload = serde_json::json!({
            "error": format!("{err:#}"),
            "exit_code": code,
        });
        eprintln!("{payload}");
    } else {
        eprintln!("ERROR: {err:#}");
    }
    std::process::exit(code)
}
