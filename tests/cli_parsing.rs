use clap::Parser;
use coverage_sync::cli::Cli;
use std::path::PathBuf;

#[test]
fn test_parse_minimal() {
    let cli = Cli::try_parse_from(["coverage-sync", "--repo", "octo/ospa"]).unwrap();

    assert_eq!(cli.sync.repo, "octo/ospa");
    assert!(cli.sync.registry_path.is_none());
    assert_eq!(cli.sync.repo_root, PathBuf::from("."));
    assert!(!cli.sync.dry_run);
    assert!(!cli.json);
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_all_flags() {
    let cli = Cli::try_parse_from([
        "coverage-sync",
        "--repo",
        "octo/ospa",
        "--registry-path",
        "registry/registry.go",
        "--repo-root",
        "/src/ospa",
        "--dry-run",
        "--json",
        "--config",
        "ci.yaml",
    ])
    .unwrap();

    assert_eq!(
        cli.sync.registry_path,
        Some(PathBuf::from("registry/registry.go"))
    );
    assert_eq!(cli.sync.repo_root, PathBuf::from("/src/ospa"));
    assert!(cli.sync.dry_run);
    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("ci.yaml")));
}

#[test]
fn test_repo_is_required() {
    let err = Cli::try_parse_from(["coverage-sync", "--dry-run"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    // clap reports usage errors with the same exit code as pre-flight errors.
    assert_eq!(err.exit_code(), coverage_sync::cli::EXIT_CONFIG);
}
