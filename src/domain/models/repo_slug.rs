//! `owner/name` repository identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A GitHub repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoSlug {
    /// Account or organisation.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

/// Returned when a repository argument is not `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("--repo must be \"owner/name\", got {0:?}")]
pub struct InvalidRepoSlug(pub String);

impl FromStr for RepoSlug {
    type Err = InvalidRepoSlug;

    /// Splits on the first `/`. Both halves must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(InvalidRepoSlug(s.to_string())),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_name() {
        let slug: RepoSlug = "openstack-auditor/ospa".parse().unwrap();
        assert_eq!(slug.owner, "openstack-auditor");
        assert_eq!(slug.name, "ospa");
        assert_eq!(slug.to_string(), "openstack-auditor/ospa");
    }

    #[test]
    fn test_rejects_missing_slash_and_empty_parts() {
        assert!("ospa".parse::<RepoSlug>().is_err());
        assert!("/ospa".parse::<RepoSlug>().is_err());
        assert!("owner/".parse::<RepoSlug>().is_err());
    }
}
