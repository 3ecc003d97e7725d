//! End-to-end sync runs: registry file on disk, GitHub on a mock server.

mod common;

use std::path::PathBuf;

use common::NOVA_REGISTRY;
use coverage_sync::cli::commands::sync::run;
use coverage_sync::cli::{exit_code, SyncArgs, EXIT_CONFIG, EXIT_FAILURE};
use coverage_sync::Config;
use mockito::{Matcher, Server, ServerGuard};
use tempfile::TempDir;

const REGISTRY_REL: &str = "cmd/scaffold/internal/registry/registry.go";

fn repo_checkout(registry: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(REGISTRY_REL);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, registry).unwrap();
    dir
}

fn args(root: &TempDir, dry_run: bool) -> SyncArgs {
    SyncArgs {
        repo: "octo/ospa".to_string(),
        registry_path: None,
        repo_root: root.path().to_path_buf(),
        dry_run,
    }
}

fn config(server: &ServerGuard) -> Config {
    let mut config = Config::default();
    config.github.api_base = server.url();
    config.sync.write_delay_ms = 0;
    config
}

async fn mock_existing(server: &mut ServerGuard) {
    server
        .mock("GET", "/repos/octo/ospa/labels/ospa-coverage")
        .with_status(200)
        .with_body(r#"{"name":"ospa-coverage","color":"0E8A16"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/ospa/issues")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(r#"[{"number":1,"title":"[coverage] Implement nova:instance","state":"open"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/ospa/issues")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
}

#[tokio::test]
async fn test_run_creates_missing_issue_with_signals_in_body() {
    let mut server = Server::new_async().await;
    mock_existing(&mut server).await;
    let create = server
        .mock("POST", "/repos/octo/ospa/issues")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "title": "[coverage] Implement nova:volume",
                "labels": ["ospa-coverage"]
            })),
            Matcher::Regex("pkg/services/services/nova.go`: ✅".to_string()),
        ]))
        .with_status(201)
        .with_body(r#"{"number":2,"html_url":"https://github.com/octo/ospa/issues/2"}"#)
        .expect(1)
        .create_async()
        .await;

    let root = repo_checkout(NOVA_REGISTRY);
    let svc = root.path().join("pkg/services/services/nova.go");
    std::fs::create_dir_all(svc.parent().unwrap()).unwrap();
    std::fs::write(svc, "package services\n").unwrap();

    let summary = run(&args(&root, false), &config(&server), Some("ghp_test".into()))
        .await
        .unwrap();

    assert_eq!(
        summary.summary_line(),
        "Done. created=1 skipped_existing=1 total_registry=2"
    );
    create.assert_async().await;
}

#[tokio::test]
async fn test_dry_run_issues_no_posts() {
    let mut server = Server::new_async().await;
    mock_existing(&mut server).await;
    let posts = server
        .mock("POST", Matcher::Any)
        .with_status(201)
        .expect(0)
        .create_async()
        .await;

    let root = repo_checkout(NOVA_REGISTRY);
    let summary = run(&args(&root, true), &config(&server), Some("ghp_test".into()))
        .await
        .unwrap();

    assert_eq!(summary.created, 1);
    assert_eq!(summary.skipped_existing, 1);
    assert!(summary.dry_run);
    posts.assert_async().await;
}

#[tokio::test]
async fn test_missing_token_is_config_error() {
    let root = repo_checkout(NOVA_REGISTRY);
    let err = run(&args(&root, true), &Config::default(), None)
        .await
        .unwrap_err();
    assert_eq!(exit_code(&err), EXIT_CONFIG);
}

#[tokio::test]
async fn test_missing_registry_is_config_error() {
    let root = tempfile::tempdir().unwrap();
    let mut a = args(&root, true);
    a.registry_path = Some(PathBuf::from("nope/registry.go"));
    let err = run(&a, &Config::default(), Some("ghp_test".into()))
        .await
        .unwrap_err();
    assert_eq!(exit_code(&err), EXIT_CONFIG);
    assert!(err.to_string().contains("registry not found"));
}

#[tokio::test]
async fn test_stale_registry_format_fails_before_network() {
    let server = Server::new_async().await;
    let root = repo_checkout("package registry\n\nvar Registry = map[string]Service{}\n");
    let err = run(&args(&root, false), &config(&server), Some("ghp_test".into()))
        .await
        .unwrap_err();
    assert_eq!(exit_code(&err), EXIT_FAILURE);
    assert!(format!("{err:#}").contains("parsed 0 resources"));
}

#[tokio::test]
async fn test_remote_error_aborts_with_failure_code() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/octo/ospa/labels/ospa-coverage")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;

    let root = repo_checkout(NOVA_REGISTRY);
    let err = run(&args(&root, false), &config(&server), Some("bad".into()))
        .await
        .unwrap_err();
    assert_eq!(exit_code(&err), EXIT_FAILURE);
    assert!(format!("{err:#}").contains("Bad credentials"));
}
