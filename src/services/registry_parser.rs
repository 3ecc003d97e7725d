//! Coverage registry parser.
//!
//! Extracts `(service, resource, description)` triples from the Go source
//! form of the scaffold registry:
//!
//! ```text
//! var OpenStackServiceRegistry = map[string]ServiceInfo{
//!     "nova": {
//!         ServiceType: "compute",
//!         Resources: map[string]ResourceInfo{
//!             "instance": {Description: "Server instances"},
//!         },
//!     },
//! }
//! ```
//!
//! This is not a Go parser. Each line is classified into a [`LineTag`] and
//! fed to a small state machine ([`ParseState`]) that only understands the
//! layout the registry is known to use: one entry per line, braces at line
//! ends. Anything else is ignored, and a registry that yields no resources
//! at all is reported as a parse error because it almost certainly means
//! the layout changed under us.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Resource;

/// Marker for the start of the registry map.
pub const REGISTRY_MARKER: &str = "var OpenStackServiceRegistry";

static SERVICE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"(?P<svc>[a-z0-9_-]+)"\s*:\s*\{\s*$"#).expect("valid regex"));

static RESOURCE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"(?P<res>[a-z0-9_-]+)"\s*:\s*\{Description:\s*"(?P<desc>[^"]*)"\}\s*,?\s*$"#)
        .expect("valid regex")
});

/// Classification of a single registry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineTag {
    /// `var OpenStackServiceRegistry = ...{`
    RegistryStart,
    /// `"nova": {`
    ServiceOpen(String),
    /// `Resources: map[string]ResourceInfo{`
    ///
    /// An inline map that closes on the same line (`...ResourceInfo{},`) is
    /// [`LineTag::Other`].
    ResourcesOpen,
    /// `"instance": {Description: "Server instances"},`
    ResourceEntry {
        /// Resource name.
        name: String,
        /// `Description:` value.
        description: String,
    },
    /// Any other line that opens a nested block, e.g. `Defaults: ServiceDefaults{`
    OpenBlock,
    /// `},`
    CloseEntry,
    /// `}`
    CloseRegistry,
    /// Anything else.
    Other,
}

impl LineTag {
    /// Classify one line of registry source.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();

        if line.contains(REGISTRY_MARKER) {
            return Self::RegistryStart;
        }
        if let Some(caps) = RESOURCE_ENTRY.captures(line) {
            return Self::ResourceEntry {
                name: caps["res"].to_string(),
                description: caps["desc"].to_string(),
            };
        }
        if let Some(caps) = SERVICE_OPEN.captures(line) {
            return Self::ServiceOpen(caps["svc"].to_string());
        }
        if trimmed.ends_with('{')
            && line.contains("Resources:")
            && line.contains("map[string]ResourceInfo")
        {
            return Self::ResourcesOpen;
        }
        match trimmed {
            "}," => Self::CloseEntry,
            "}" => Self::CloseRegistry,
            t if t.ends_with('{') => Self::OpenBlock,
            _ => Self::Other,
        }
    }
}

/// Where the parser currently is inside the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseState {
    /// Before the registry marker.
    SeekingRegistry,
    /// Between service blocks.
    SeekingService,
    /// Inside a service block.
    InService {
        /// Service name.
        service: String,
        /// Nested non-resource blocks currently open.
        depth: usize,
    },
    /// Inside a service's `Resources:` map.
    InResources {
        /// Service name.
        service: String,
    },
    /// Past the registry's closing brace.
    Done,
}

impl ParseState {
    /// Advance on one classified line, emitting a resource when one is read.
    pub fn step(self, tag: LineTag) -> (Self, Option<Resource>) {
        use LineTag as T;
        use ParseState as S;

        match (self, tag) {
            (S::Done, _) => (S::Done, None),

            (S::SeekingRegistry, T::RegistryStart) => (S::SeekingService, None),
            (S::SeekingRegistry, _) => (S::SeekingRegistry, None),

            (_, T::CloseRegistry) => (S::Done, None),

            (S::SeekingService, T::ServiceOpen(service)) => {
                (S::InService { service, depth: 0 }, None)
            }
            (S::SeekingService, _) => (S::SeekingService, None),

            (S::InService { service, depth: 0 }, T::ResourcesOpen) => {
                (S::InResources { service }, None)
            }
            (S::InService { service, depth }, T::OpenBlock | T::ResourcesOpen | T::ServiceOpen(_)) => {
                (S::InService { service, depth: depth + 1 }, None)
            }
            (S::InService { service, depth }, T::CloseEntry) if depth > 0 => {
                (S::InService { service, depth: depth - 1 }, None)
            }
            (S::InService { .. }, T::CloseEntry) => (S::SeekingService, None),
            (state @ S::InService { .. }, _) => (state, None),

            (S::InResources { service }, T::ResourceEntry { name, description }) => {
                let resource = Resource::new(service.clone(), name, description);
                (S::InResources { service }, Some(resource))
            }
            (S::InResources { service }, T::CloseEntry) => {
                (S::InService { service, depth: 0 }, None)
            }
            (state @ S::InResources { .. }, _) => (state, None),
        }
    }
}

/// Parse the registry source into resources sorted by `(service, resource)`.
///
/// Fails when no resources are found or when a `(service, resource)` key
/// appears twice. Blank descriptions are accepted with a warning.
pub fn parse_registry(source: &str) -> DomainResult<Vec<Resource>> {
    let mut state = ParseState::SeekingRegistry;
    let mut resources = Vec::new();

    for (lineno, line) in source.lines().enumerate() {
        let tag = LineTag::classify(line);
        let (next, emitted) = state.step(tag);
        state = next;

        if let Some(resource) = emitted {
            tracing::trace!(line = lineno + 1, %resource, "registry entry");
            resources.push(resource);
        }
        if state == ParseState::Done {
            break;
        }
    }

    if resources.is_empty() {
        return Err(DomainError::Parse(
            "parsed 0 resources from registry; parser likely needs adjustment".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for r in &resources {
        if !seen.insert(r.key()) {
            return Err(DomainError::Parse(format!(
                "duplicate registry entry {r}; issue titles would collide"
            )));
        }
        if r.description.trim().is_empty() {
            tracing::warn!(service = %r.service, resource = %r.resource, "registry entry has a blank description");
        }
    }

    resources.sort();
    Ok(resources)
}
