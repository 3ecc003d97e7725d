//! Issue tracker port.
//!
//! The reconciler talks to the remote tracker exclusively through this
//! trait, so tests can substitute an in-memory tracker and count writes.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{LabelSpec, TrackedIssue};

/// Port for the remote issue tracker that holds coverage issues.
///
/// Implementations are bound to a single repository.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Whether a label with this name exists. A missing label is `Ok(false)`,
    /// not an error.
    async fn label_exists(&self, name: &str) -> DomainResult<bool>;

    /// Create a label. Mutating.
    async fn create_label(&self, label: &LabelSpec) -> DomainResult<()>;

    /// All issues in any state that carry `label`, pull requests excluded.
    async fn list_labeled_issues(&self, label: &str) -> DomainResult<Vec<TrackedIssue>>;

    /// Create an issue and return its number. Mutating.
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> DomainResult<u64>;
}
