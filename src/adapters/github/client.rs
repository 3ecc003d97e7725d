//! GitHub HTTP client for coverage issue sync.
//!
//! Wraps the four GitHub REST API v3 operations the sync needs: look up a
//! label, create a label, list labelled issues (paginated) and create an
//! issue. Every non-2xx response is surfaced as
//! [`DomainError::GitHubApi`] carrying the status and response body.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LabelSpec, RepoSlug, TrackedIssue};
use crate::domain::ports::IssueTracker;

use super::models::{
    GitHubCreateIssueRequest, GitHubCreateIssueResponse, GitHubCreateLabelRequest, GitHubIssue,
    GitHubLabel,
};

/// Base URL for the GitHub REST API v3.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Pinned REST API version sent with every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Bearer token (classic, fine-grained or the Actions `GITHUB_TOKEN`).
    pub token: String,
    /// REST API root, e.g. `https://api.github.com`.
    pub api_base: String,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Page size for issue listing (GitHub caps it at 100).
    pub per_page: u32,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: GITHUB_API_BASE.to_string(),
            user_agent: "ospa-coverage-issue-bot".to_string(),
            per_page: 100,
        }
    }
}

/// HTTP client for one GitHub repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    config: GitHubClientConfig,
    repo: RepoSlug,
}

impl GitHubClient {
    /// Create a client for `repo` with the given configuration.
    pub fn new(config: GitHubClientConfig, repo: RepoSlug) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config, repo })
    }

    /// Read the token from `GITHUB_TOKEN`, trimming whitespace.
    ///
    /// Returns `None` if the variable is unset or blank.
    pub fn token_from_env() -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Build `{api_base}/repos/{owner}/{repo}/{segments...}` with each
    /// segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> DomainResult<Url> {
        let mut url = Url::parse(&self.config.api_base).map_err(|e| {
            DomainError::Configuration(format!(
                "invalid GitHub API base URL {:?}: {e}",
                self.config.api_base
            ))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                DomainError::Configuration(format!(
                    "GitHub API base URL {:?} cannot carry a path",
                    self.config.api_base
                ))
            })?
            .pop_if_empty()
            .extend(["repos", self.repo.owner.as_str(), self.repo.name.as_str()])
            .extend(segments);
        Ok(url)
    }

    /// Build an authorized request with the GitHub API headers.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    /// Send a request and turn any non-2xx answer into [`DomainError::GitHubApi`].
    async fn send(&self, method: Method, url: Url, builder: RequestBuilder) -> DomainResult<Response> {
        let resp = builder.send().await.map_err(|e| {
            DomainError::Request(format!("GitHub {method} {url} request failed: {e}"))
        })?;

        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(DomainError::GitHubApi {
            status: status.as_u16(),
            method: method.to_string(),
            url: url.to_string(),
            body,
        })
    }

    /// Fetch a label by name. A 404 means the label does not exist.
    pub async fn get_label(&self, name: &str) -> DomainResult<Option<GitHubLabel>> {
        let url = self.endpoint(&["labels", name])?;
        let builder = self.request(Method::GET, url.clone());

        match self.send(Method::GET, url, builder).await {
            Ok(resp) => Ok(Some(resp.json::<GitHubLabel>().await?)),
            Err(DomainError::GitHubApi { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Create a label on the repository.
    pub async fn post_label(&self, label: &LabelSpec) -> DomainResult<()> {
        let url = self.endpoint(&["labels"])?;
        let body = GitHubCreateLabelRequest {
            name: label.name.clone(),
            color: label.color.clone(),
            description: label.description.clone(),
        };
        let builder = self.request(Method::POST, url.clone()).json(&body);
        self.send(Method::POST, url, builder).await?;
        Ok(())
    }

    /// Fetch one page of issues (any state) carrying `label`.
    ///
    /// Pages are 1-based. The result still contains pull requests.
    pub async fn list_issues_page(&self, label: &str, page: u32) -> DomainResult<Vec<GitHubIssue>> {
        let mut url = self.endpoint(&["issues"])?;
        url.query_pairs_mut()
            .append_pair("state", "all")
            .append_pair("labels", label)
            .append_pair("per_page", &self.config.per_page.to_string())
            .append_pair("page", &page.to_string());

        let builder = self.request(Method::GET, url.clone());
        let resp = self.send(Method::GET, url, builder).await?;
        let text = resp.text().await?;
        let issues: Vec<GitHubIssue> = serde_json::from_str(&text).map_err(|e| {
            DomainError::Serialization(format!("expected a JSON list of issues: {e}"))
        })?;
        Ok(issues)
    }

    /// Fetch every issue carrying `label`, following pages until an empty one.
    pub async fn list_all_issues(&self, label: &str) -> DomainResult<Vec<GitHubIssue>> {
        let mut all = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.list_issues_page(label, page).await?;
            tracing::debug!(page, count = batch.len(), "fetched issue page");
            if batch.is_empty() {
                break;
            }
            all.extend(batch);
            page += 1;
        }
        Ok(all)
    }

    /// Create a new issue. Returns the created issue's number and URL.
    pub async fn post_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> DomainResult<GitHubCreateIssueResponse> {
        let url = self.endpoint(&["issues"])?;
        let req_body = GitHubCreateIssueRequest {
            title: title.to_string(),
            body: Some(body.to_string()),
            labels: Some(labels.to_vec()),
        };
        let builder = self.request(Method::POST, url.clone()).json(&req_body);
        let resp = self.send(Method::POST, url, builder).await?;
        Ok(resp.json::<GitHubCreateIssueResponse>().await?)
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn label_exists(&self, name: &str) -> DomainResult<bool> {
        Ok(self.get_label(name).await?.is_some())
    }

    async fn create_label(&self, label: &LabelSpec) -> DomainResult<()> {
        self.post_label(label).await
    }

    async fn list_labeled_issues(&self, label: &str) -> DomainResult<Vec<TrackedIssue>> {
        let issues = self.list_all_issues(label).await?;
        Ok(issues
            .into_iter()
            // GitHub returns pull requests from the issues endpoint too.
            .filter(|issue| !issue.is_pull_request())
            .map(TrackedIssue::from)
            .collect())
    }

    async fn create_issue(&self, title: &str, body: &str, labels: &[String]) -> DomainResult<u64> {
        let created = self.post_issue(title, body, labels).await?;
        tracing::info!(
            issue_number = created.number,
            url = %created.html_url,
            "created GitHub issue"
        );
        Ok(created.number)
    }
}
