//! Common test utilities for integration tests
//!
//! Provides an in-memory issue tracker, a capturable output sink and
//! registry fixtures shared across integration test files.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coverage_sync::domain::models::{LabelSpec, TrackedIssue};
use coverage_sync::{DomainError, DomainResult, IssueTracker};

/// Two-resource registry used by the worked example.
pub const NOVA_REGISTRY: &str = r#"package registry

var OpenStackServiceRegistry = map[string]ServiceInfo{
	"nova": {
		ServiceType: "compute",
		Resources: map[string]ResourceInfo{
			"instance": {Description: "Server instances"},
			"volume":   {Description: "Block volumes"},
		},
	},
}
"#;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Everything a [`FakeTracker`] has been asked to do.
#[derive(Debug, Default, Clone)]
pub struct TrackerState {
    pub labels: Vec<String>,
    pub issues: Vec<TrackedIssue>,
    pub label_creations: usize,
    pub issue_creations: Vec<String>,
    /// Fail the Nth issue creation (1-based) with a 502.
    pub fail_on_creation: Option<usize>,
}

/// In-memory tracker counting every mutating call.
#[derive(Debug, Default, Clone)]
pub struct FakeTracker {
    pub state: Arc<Mutex<TrackerState>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(self, name: &str) -> Self {
        self.state.lock().unwrap().labels.push(name.to_string());
        self
    }

    pub fn with_issue(self, number: u64, title: &str) -> Self {
        self.state.lock().unwrap().issues.push(TrackedIssue {
            number,
            title: title.to_string(),
        });
        self
    }

    pub fn failing_on_creation(self, nth: usize) -> Self {
        self.state.lock().unwrap().fail_on_creation = Some(nth);
        self
    }

    pub fn snapshot(&self) -> TrackerState {
        self.state.lock().unwrap().clone()
    }

    pub fn mutating_calls(&self) -> usize {
        let s = self.state.lock().unwrap();
        s.label_creations + s.issue_creations.len()
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn label_exists(&self, name: &str) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().labels.iter().any(|l| l == name))
    }

    async fn create_label(&self, label: &LabelSpec) -> DomainResult<()> {
        let mut s = self.state.lock().unwrap();
        s.label_creations += 1;
        s.labels.push(label.name.clone());
        Ok(())
    }

    async fn list_labeled_issues(&self, _label: &str) -> DomainResult<Vec<TrackedIssue>> {
        Ok(self.state.lock().unwrap().issues.clone())
    }

    async fn create_issue(&self, title: &str, _body: &str, _labels: &[String]) -> DomainResult<u64> {
        let mut s = self.state.lock().unwrap();
        let attempt = s.issue_creations.len() + 1;
        if s.fail_on_creation == Some(attempt) {
            return Err(DomainError::GitHubApi {
                status: 502,
                method: "POST".to_string(),
                url: "fake://issues".to_string(),
                body: "Bad Gateway".to_string(),
            });
        }
        let number = s.issues.len() as u64 + 100;
        s.issue_creations.push(title.to_string());
        s.issues.push(TrackedIssue {
            number,
            title: title.to_string(),
        });
        Ok(number)
    }
}

/// A `Write` sink whose contents can be read back after the run.
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
