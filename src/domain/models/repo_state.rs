//! Best-effort repository signals for a registry resource.

use serde::{Deserialize, Serialize};

use super::Resource;

/// Number of signals tracked per resource.
pub const SIGNAL_COUNT: usize = 7;

/// Which conventional implementation files already exist for a resource.
///
/// Only used to decorate the issue body; reconciliation never depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoState {
    /// `pkg/services/services/{svc}.go`
    pub has_service_impl: bool,
    /// `pkg/discovery/services/{svc}.go`
    pub has_discovery_impl: bool,
    /// `pkg/audit/{svc}/{res}.go`
    pub has_auditor: bool,
    /// `pkg/audit/{svc}/{res}_test.go`
    pub has_auditor_test: bool,
    /// `pkg/policy/validation/{svc}.go`
    pub has_policy_validation: bool,
    /// `e2e/{svc}_test.go`
    pub has_e2e_test: bool,
    /// `examples/policies/{svc}-policy-guide.md`
    pub has_policy_guide: bool,
}

impl RepoState {
    /// Build from flags in [`conventional_paths`] order.
    pub const fn from_flags(flags: [bool; SIGNAL_COUNT]) -> Self {
        let [service, discovery, auditor, auditor_test, validation, e2e, guide] = flags;
        Self {
            has_service_impl: service,
            has_discovery_impl: discovery,
            has_auditor: auditor,
            has_auditor_test: auditor_test,
            has_policy_validation: validation,
            has_e2e_test: e2e,
            has_policy_guide: guide,
        }
    }

    /// Flags in [`conventional_paths`] order.
    pub const fn flags(&self) -> [bool; SIGNAL_COUNT] {
        [
            self.has_service_impl,
            self.has_discovery_impl,
            self.has_auditor,
            self.has_auditor_test,
            self.has_policy_validation,
            self.has_e2e_test,
            self.has_policy_guide,
        ]
    }

    /// The scaffold generator has produced the auditor and the policy validator.
    pub const fn scaffold_generated(&self) -> bool {
        self.has_auditor && self.has_policy_validation
    }
}

/// Repository-relative paths a finished implementation of `resource` leaves
/// behind, one per [`RepoState`] field.
pub fn conventional_paths(resource: &Resource) -> [String; SIGNAL_COUNT] {
    let svc = &resource.service;
    let res = &resource.resource;
    [
        format!("pkg/services/services/{svc}.go"),
        format!("pkg/discovery/services/{svc}.go"),
        format!("pkg/audit/{svc}/{res}.go"),
        format!("pkg/audit/{svc}/{res}_test.go"),
        format!("pkg/policy/validation/{svc}.go"),
        format!("e2e/{svc}_test.go"),
        format!("examples/policies/{svc}-policy-guide.md"),
    ]
}
