//! Outcome of one sync run.

use serde::{Deserialize, Serialize};

/// Counts reported at the end of a run.
///
/// In dry-run mode `created` counts the issues that *would* have been
/// created, so the numbers match a real run against the same remote state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// Issues created, or planned in dry-run.
    pub created: usize,
    /// Resources whose issue already existed.
    pub skipped_existing: usize,
    /// Resources read from the registry.
    pub total_registry: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Titles created (or planned, in dry-run), in registry order.
    #[serde(default)]
    pub created_titles: Vec<String>,
}

impl SyncSummary {
    /// Empty summary for a registry of `total_registry` resources.
    pub fn new(total_registry: usize, dry_run: bool) -> Self {
        Self {
            total_registry,
            dry_run,
            ..Default::default()
        }
    }

    /// Count one created (or planned) issue.
    pub fn record_created(&mut self, title: String) {
        self.created += 1;
        self.created_titles.push(title);
    }

    /// Count one resource that already had an issue.
    pub fn record_skipped(&mut self) {
        self.skipped_existing += 1;
    }

    /// The single-line stdout summary.
    pub fn summary_line(&self) -> String {
        format!(
            "Done. created={} skipped_existing={} total_registry={}",
            self.created, self.skipped_existing, self.total_registry
        )
    }
}
