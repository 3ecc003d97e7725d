//! Snapshot of the coverage issues that already exist remotely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An issue as seen by the reconciler: just its number and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedIssue {
    /// Issue number within the repository.
    pub number: u64,
    /// Issue title, compared verbatim against derived titles.
    pub title: String,
}

/// Title → issue number map, rebuilt from the tracker on every run.
#[derive(Debug, Clone, Default)]
pub struct IssueIndex {
    by_title: HashMap<String, u64>,
}

impl IssueIndex {
    /// Issue number already tracking `title`, if any.
    pub fn number_of(&self, title: &str) -> Option<u64> {
        self.by_title.get(title).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_title.len()
    }
}

impl FromIterator<TrackedIssue> for IssueIndex {
    /// Issues with an empty title or number 0 are ignored. When two issues
    /// share a title the later one wins.
    fn from_iter<I: IntoIterator<Item = TrackedIssue>>(iter: I) -> Self {
        let by_title = iter
            .into_iter()
            .filter(|issue| !issue.title.is_empty() && issue.number != 0)
            .map(|issue| (issue.title, issue.number))
            .collect();
        Self { by_title }
    }
}
