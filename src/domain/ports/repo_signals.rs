//! Repository signals port.

use crate::domain::models::{RepoState, Resource};

/// Source of best-effort repository signals used when rendering issue bodies.
///
/// Implementations must not fail: a signal that cannot be determined is
/// reported as absent.
pub trait RepoSignals: Send + Sync {
    fn detect(&self, resource: &Resource) -> RepoState;
}

/// Reports every signal as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSignals;

impl RepoSignals for NoSignals {
    fn detect(&self, _resource: &Resource) -> RepoState {
        RepoState::default()
    }
}
