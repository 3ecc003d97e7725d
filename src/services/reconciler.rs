//! Issue reconciler.
//!
//! Diffs the registry against the coverage issues that already exist and
//! creates the missing ones. Every decision is recomputed from remote
//! state on each run, so a run that dies halfway is completed by simply
//! running again.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::models::{IssueIndex, LabelSpec, RepoSlug, Resource, SyncSummary};
use crate::domain::ports::{IssueTracker, RepoSignals};

use super::issue_body;

/// Prefix for every intent line printed in dry-run mode.
pub const DRY_RUN_PREFIX: &str = "[dry-run]";

/// Settings for one reconciliation run.
#[derive(Debug, Clone)]
pub struct ReconcilerOptions {
    /// Target repository, named in the issue body footer.
    pub repo: RepoSlug,
    /// Label applied to, and used to discover, coverage issues.
    pub label: LabelSpec,
    /// Replace mutating calls with printed intent.
    pub dry_run: bool,
    /// Pause after each real issue creation.
    pub write_delay: Duration,
}

/// Creates one coverage issue per registry resource that lacks one.
pub struct Reconciler {
    tracker: Arc<dyn IssueTracker>,
    signals: Arc<dyn RepoSignals>,
    options: ReconcilerOptions,
    /// Sink for dry-run intent lines (stdout in the CLI).
    out: Mutex<Box<dyn Write + Send>>,
}

impl Reconciler {
    /// Create a reconciler that prints dry-run lines to stdout.
    pub fn new(
        tracker: Arc<dyn IssueTracker>,
        signals: Arc<dyn RepoSignals>,
        options: ReconcilerOptions,
    ) -> Self {
        Self {
            tracker,
            signals,
            options,
            out: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Send dry-run intent lines somewhere other than stdout.
    #[must_use]
    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = Mutex::new(out);
        self
    }

    fn announce(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{DRY_RUN_PREFIX} {line}") {
            tracing::warn!(error = %e, "failed to write dry-run line");
        }
    }

    /// Make sure the tracking label exists. No write when it already does.
    pub async fn ensure_label(&self) -> DomainResult<()> {
        let label = &self.options.label;
        if self.tracker.label_exists(&label.name).await? {
            tracing::debug!(label = %label.name, "label already present");
            return Ok(());
        }

        if self.options.dry_run {
            self.announce(&format!("would create label: {}", label.name));
            return Ok(());
        }

        tracing::info!(label = %label.name, color = %label.color, "creating label");
        self.tracker.create_label(label).await
    }

    /// Build the title → number index of issues already carrying the label.
    pub async fn existing_issues(&self) -> DomainResult<IssueIndex> {
        let issues = self
            .tracker
            .list_labeled_issues(&self.options.label.name)
            .await?;
        let index: IssueIndex = issues.into_iter().collect();
        tracing::info!(existing = index.len(), "indexed existing coverage issues");
        Ok(index)
    }

    /// Reconcile `resources` (already in registry order) against the tracker.
    ///
    /// The first remote error aborts the run; issues created before it stay
    /// created.
    pub async fn sync(&self, resources: &[Resource]) -> DomainResult<SyncSummary> {
        self.ensure_label().await?;
        let existing = self.existing_issues().await?;

        let mut summary = SyncSummary::new(resources.len(), self.options.dry_run);
        let labels = vec![self.options.label.name.clone()];

        for resource in resources {
            let title = resource.issue_title();

            if let Some(number) = existing.number_of(&title) {
                tracing::debug!(%title, issue_number = number, "already tracked");
                summary.record_skipped();
                continue;
            }

            if self.options.dry_run {
                self.announce(&format!("would create issue: {title}"));
                summary.record_created(title);
                continue;
            }

            let state = self.signals.detect(resource);
            let body = issue_body::render(&self.options.repo, resource, &state);
            let number = self.tracker.create_issue(&title, &body, &labels).await?;
            tracing::info!(
                service = %resource.service,
                resource = %resource.resource,
                issue_number = number,
                "created coverage issue"
            );
            summary.record_created(title);

            // Be gentle with the API's secondary rate limits.
            if !self.options.write_delay.is_zero() {
                tokio::time::sleep(self.options.write_delay).await;
            }
        }

        Ok(summary)
    }
}
