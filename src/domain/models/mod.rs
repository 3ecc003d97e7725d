//! Domain models for coverage issue synchronisation.

pub mod issue_index;
pub mod label;
pub mod repo_slug;
pub mod repo_state;
pub mod resource;
pub mod summary;

pub use issue_index::{IssueIndex, TrackedIssue};
pub use label::LabelSpec;
pub use repo_slug::{InvalidRepoSlug, RepoSlug};
pub use repo_state::{conventional_paths, RepoState, SIGNAL_COUNT};
pub use resource::Resource;
pub use summary::SyncSummary;
