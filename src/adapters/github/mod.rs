//! GitHub Issues adapter.
//!
//! Implements the [`IssueTracker`](crate::domain::ports::IssueTracker)
//! port against the GitHub REST API: label lookup/creation, paginated
//! issue listing filtered by label, and issue creation.

pub mod client;
pub mod models;

pub use client::{GitHubClient, GitHubClientConfig, GITHUB_API_BASE, TOKEN_ENV_VAR};
