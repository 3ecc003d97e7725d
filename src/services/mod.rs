//! Application services: registry parsing, issue bodies, reconciliation.

pub mod issue_body;
pub mod reconciler;
pub mod registry_parser;

pub use reconciler::{Reconciler, ReconcilerOptions, DRY_RUN_PREFIX};
pub use registry_parser::parse_registry;
