//! Filesystem-backed repository signals.
//!
//! Checks for the conventional file paths a fully implemented
//! service/resource leaves behind in the auditor repository.

use std::path::PathBuf;

use crate::domain::models::{conventional_paths, RepoState, Resource};
use crate::domain::ports::RepoSignals;

/// Probes a checked-out repository for implementation files.
#[derive(Debug, Clone)]
pub struct FsRepoSignals {
    root: PathBuf,
}

impl FsRepoSignals {
    /// Probe paths relative to the checkout at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).is_file()
    }
}

impl RepoSignals for FsRepoSignals {
    fn detect(&self, resource: &Resource) -> RepoState {
        RepoState::from_flags(conventional_paths(resource).map(|path| self.exists(&path)))
    }
}
