//! Markdown body for a coverage issue.
//!
//! The body lists the resource, the best-effort repository signals, an
//! end-to-end implementation guide and a completion checklist. It is only
//! rendered for issues that are about to be created; existing issues are
//! never rewritten.

use std::fmt::Write as _;

use crate::domain::models::{conventional_paths, RepoSlug, RepoState, Resource};

fn mark(present: bool) -> &'static str {
    if present {
        "✅"
    } else {
        "❌"
    }
}

fn checkbox(done: bool) -> &'static str {
    if done {
        "x"
    } else {
        " "
    }
}

/// Checklist items and whether the repository signals already satisfy them.
pub fn checklist(state: &RepoState) -> [(&'static str, bool); 8] {
    [
        ("Scaffold generated", state.scaffold_generated()),
        ("Discovery implemented (real OpenStack listing)", false),
        ("Auditor Check() implemented (real fields + checks)", false),
        ("Auditor Fix() implemented (delete/tag/etc)", false),
        ("Policy validation tightened for this resource", false),
        ("E2E assertions added/updated", false),
        ("Unit tests updated (no placeholders)", state.has_auditor_test),
        ("Docs/policy guide updated", state.has_policy_guide),
    ]
}

/// Render the issue body for `resource` in repository `repo`.
pub fn render(repo: &RepoSlug, resource: &Resource, state: &RepoState) -> String {
    let svc = &resource.service;
    let res = &resource.resource;

    let mut out = String::new();

    let _ = writeln!(out, "## Resource");
    let _ = writeln!(out, "- **service**: `{svc}`");
    let _ = writeln!(out, "- **resource**: `{res}`");
    let _ = writeln!(out, "- **description**: {}", resource.description);
    out.push('\n');

    let _ = writeln!(out, "## Current repo signals (best-effort)");
    for (path, present) in conventional_paths(resource).iter().zip(state.flags()) {
        let _ = writeln!(out, "- `{path}`: {}", mark(present));
    }
    out.push('\n');

    let _ = write!(
        out,
        r"## Implementation guidance (end-to-end)
### A) Generate/refresh scaffolding (safe + idempotent)
Run:
```bash
go run ./cmd/scaffold --service {svc} --resources {res}
```

This should create or update:
- `pkg/audit/{svc}/{res}.go` + `_test.go`
- `pkg/policy/validation/{svc}.go` (register via `policy.RegisterValidator(...)`)
- `e2e/{svc}_test.go` (placeholder TODOs)
- `examples/policies/{svc}-policy-guide.md` (examples + TODOs)

### B) Implement discovery (real OpenStack listing)
Edit:
- `pkg/discovery/services/{svc}.go`

Replace placeholder closed-channel discovery with real listing logic for `{res}`:
- Use a gophercloud service client (via `pkg/auth`)
- List resources with pagination
- Emit `discovery.Job` with real `ResourceID`, `ProjectID`, and `Resource` payload

### C) Implement auditor logic (real Check/Fix)
Edit:
- `pkg/audit/{svc}/{res}.go`

Do:
- Parse/cast the incoming `resource` to the real SDK type (or a well-defined internal type)
- Populate `audit.Result` with real IDs/names/status/metadata
- Implement checks based on `rule.Check`
- Implement remediation in `Fix()` for actions (e.g. `delete`, `tag`) when `--fix` is enabled

### D) Tighten policy validation
Edit:
- `pkg/policy/validation/{svc}.go`

Do:
- Validate `check` fields for `{res}` (required fields, enums, invalid combos)
- Add resource-specific validation rules as needed

### E) E2E
Edit:
- `e2e/{svc}_test.go`

Do:
- Ensure the test environment creates at least 1–2 `{res}` resources
- Tighten assertions once discovery/audit returns real results

### F) Tests + coverage
Run:
```bash
go test ./pkg/... -count=1
go test ./cmd/scaffold/... -count=1
```

"
    );

    let _ = writeln!(out, "## Completion checklist");
    for (item, done) in checklist(state) {
        let _ = writeln!(out, "- [{}] {item}", checkbox(done));
    }
    out.push('\n');

    let _ = writeln!(out, "---");
    let _ = writeln!(out, "Tracked by repo `{repo}` coverage registry.");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> RepoSlug {
        "octo/ospa".parse().unwrap()
    }

    #[test]
    fn test_body_lists_resource_and_footer() {
        let r = Resource::new("nova", "instance", "Server instances");
        let body = render(&repo(), &r, &RepoState::default());

        assert!(body.starts_with("## Resource\n"));
        assert!(body.contains("- **service**: `nova`"));
        assert!(body.contains("- **resource**: `instance`"));
        assert!(body.contains("- **description**: Server instances"));
        assert!(body.contains("go run ./cmd/scaffold --service nova --resources instance"));
        assert!(body.trim_end().ends_with("Tracked by repo `octo/ospa` coverage registry."));
    }

    #[test]
    fn test_signals_rendered_per_path() {
        let r = Resource::new("nova", "instance", "Server instances");
        let state = RepoState {
            has_service_impl: true,
            ..Default::default()
        };
        let body = render(&repo(), &r, &state);

        assert!(body.contains("- `pkg/services/services/nova.go`: ✅"));
        assert!(body.contains("- `pkg/discovery/services/nova.go`: ❌"));
        assert!(body.contains("- `pkg/audit/nova/instance_test.go`: ❌"));
    }

    #[test]
    fn test_checklist_reflects_signals() {
        let r = Resource::new("cinder", "volume", "Block volumes");
        let state = RepoState {
            has_auditor: true,
            has_policy_validation: true,
            has_policy_guide: true,
            ..Default::default()
        };
        let body = render(&repo(), &r, &state);

        assert!(body.contains("- [x] Scaffold generated"));
        assert!(body.contains("- [ ] Unit tests updated (no placeholders)"));
        assert!(body.contains("- [x] Docs/policy guide updated"));
        assert!(body.contains("- [ ] Discovery implemented (real OpenStack listing)"));
    }

    #[test]
    fn test_scaffold_needs_both_auditor_and_validation() {
        let state = RepoState {
            has_auditor: true,
            ..Default::default()
        };
        assert!(!checklist(&state)[0].1);
    }
}
