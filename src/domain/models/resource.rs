//! Registry resource domain model.
//!
//! A resource is one OpenStack service/resource pair declared by the
//! coverage registry. Its derived issue title is the only identity the
//! sync uses to decide whether a tracking issue already exists.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shared by every coverage issue title.
const TITLE_PREFIX: &str = "[coverage] Implement ";

/// A service/resource pair from the registry.
///
/// Equality and ordering use the `(service, resource)` key only; the
/// description is presentation data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// OpenStack service name (e.g. `nova`).
    pub service: String,
    /// Resource type within the service (e.g. `instance`).
    pub resource: String,
    /// Human-readable description from the registry.
    pub description: String,
}

impl Resource {
    /// Build a resource from its registry fields.
    pub fn new(
        service: impl Into<String>,
        resource: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            resource: resource.into(),
            description: description.into(),
        }
    }

    /// The `(service, resource)` uniqueness key.
    pub fn key(&self) -> (&str, &str) {
        (&self.service, &self.resource)
    }

    /// Title of the coverage issue tracking this resource.
    ///
    /// `[coverage] Implement <service>:<resource>`
    pub fn issue_title(&self) -> String {
        format!("{TITLE_PREFIX}{}:{}", self.service, self.resource)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.service, self.resource)
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Resource {}

impl PartialOrd for Resource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resource {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
