//! coverage-sync - registry-driven coverage issue tracker
//!
//! Reads the OpenStack service/resource coverage registry and makes sure
//! the target GitHub repository has exactly one labelled tracking issue per
//! service/resource pair. Runs are idempotent: the tracker is the only
//! state, and every decision is recomputed from it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Service Layer** (`services`): registry parsing, issue body, reconciliation
//! - **Adapters** (`adapters`): GitHub REST client, filesystem repo signals
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use coverage_sync::services::parse_registry;
//!
//! let resources = parse_registry(&std::fs::read_to_string("registry.go")?)?;
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{IssueIndex, LabelSpec, RepoSlug, RepoState, Resource, SyncSummary};
pub use domain::ports::{IssueTracker, NoSignals, RepoSignals};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{Config, ConfigError, ConfigLoader};
pub use services::{parse_registry, Reconciler, ReconcilerOptions};
