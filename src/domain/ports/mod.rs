//! Port traits between the sync services and the outside world.

pub mod issue_tracker;
pub mod repo_signals;

pub use issue_tracker::IssueTracker;
pub use repo_signals::{NoSignals, RepoSignals};
