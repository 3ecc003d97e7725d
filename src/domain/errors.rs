//! Domain errors for coverage issue synchronisation.

use thiserror::Error;

/// Errors that can abort a registry sync run.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The registry artifact could not be turned into resources.
    #[error("Registry parse error: {0}")]
    Parse(String),

    /// The issue tracker answered with a non-2xx status.
    #[error("GitHub API error {status} for {method} {url}: {body}")]
    GitHubApi {
        /// HTTP status code.
        status: u16,
        /// Request method, e.g. `POST`.
        method: String,
        /// Full request URL.
        url: String,
        /// Raw response body, usually GitHub's JSON error payload.
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Request failed: {0}")]
    Request(String),

    /// A payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The client was configured with unusable settings.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        DomainError::Request(err.to_string())
    }
}
