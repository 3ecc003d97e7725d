//! Adapters for external systems.

pub mod github;
pub mod repo_signals;

pub use repo_signals::FsRepoSignals;
