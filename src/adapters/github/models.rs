//! GitHub REST API request and response models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads used by the
//! coverage sync. They stay inside the adapter; the reconciler only sees
//! [`TrackedIssue`](crate::domain::models::TrackedIssue).

use serde::{Deserialize, Serialize};

use crate::domain::models::TrackedIssue;

/// An issue returned by the GitHub API.
///
/// Note: issues and pull requests share the same endpoint. Pull requests
/// include a non-null `pull_request` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    #[serde(default)]
    pub number: u64,
    /// Issue title.
    #[serde(default)]
    pub title: String,
    /// "open" or "closed".
    #[serde(default)]
    pub state: String,
    /// Labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    /// Present when this item is actually a pull request, not an issue.
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
    /// Browser URL of the issue.
    #[serde(default)]
    pub html_url: String,
}

impl GitHubIssue {
    /// True when the listing returned a pull request rather than an issue.
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl From<GitHubIssue> for TrackedIssue {
    fn from(issue: GitHubIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
        }
    }
}

/// A repository label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabel {
    /// Label name.
    pub name: String,
    /// Hex colour without the leading `#`.
    #[serde(default)]
    pub color: String,
    /// Optional label description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    /// API URL of the pull request.
    #[serde(default)]
    pub url: String,
}

/// Request body for creating a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCreateLabelRequest {
    /// Label name.
    pub name: String,
    /// Hex colour without the leading `#`.
    pub color: String,
    /// Label description.
    pub description: String,
}

/// Request body for creating a new GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCreateIssueRequest {
    /// Issue title.
    pub title: String,
    /// Markdown body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Label names to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Response from the create-issue endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCreateIssueResponse {
    /// Number of the new issue.
    pub number: u64,
    /// Browser URL of the new issue.
    #[serde(default)]
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_issue_deserialization() {
        let json = r###"{
            "id": 1,
            "number": 42,
            "title": "[coverage] Implement nova:instance",
            "body": "## Resource",
            "state": "open",
            "labels": [
                { "name": "ospa-coverage", "color": "0E8A16", "description": "OSPA coverage tracking" }
            ],
            "pull_request": null,
            "updated_at": "2024-01-15T10:30:00Z",
            "html_url": "https://github.com/org/repo/issues/42",
            "created_at": "2024-01-14T08:00:00Z"
        }"###;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.title, "[coverage] Implement nova:instance");
        assert_eq!(issue.labels[0].name, "ospa-coverage");
        assert!(!issue.is_pull_request());
    }

    #[test]
    fn test_pr_detection_via_pull_request_field() {
        let json = r#"{
            "number": 99,
            "title": "Add coverage for neutron",
            "state": "open",
            "pull_request": { "url": "https://api.github.com/repos/org/repo/pulls/99" }
        }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert!(issue.is_pull_request());
    }

    #[test]
    fn test_tracked_issue_conversion() {
        let json = r#"{ "number": 7, "title": "[coverage] Implement cinder:volume" }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        let tracked = TrackedIssue::from(issue);
        assert_eq!(tracked.number, 7);
        assert_eq!(tracked.title, "[coverage] Implement cinder:volume");
    }

    #[test]
    fn test_create_issue_request_omits_none_fields() {
        let req = GitHubCreateIssueRequest {
            title: "Minimal".to_string(),
            body: None,
            labels: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("\"body\""));
        assert!(!json.contains("\"labels\""));
    }
}
