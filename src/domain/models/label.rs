//! Tracking label settings.

use serde::{Deserialize, Serialize};

/// The label attached to every issue this tool manages.
///
/// It marks tool-managed issues and scopes the existing-issue query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LabelSpec {
    /// Label name
    #[serde(default = "default_label_name")]
    pub name: String,

    /// Hex colour without the leading `#`
    #[serde(default = "default_label_color")]
    pub color: String,

    /// Label description shown in the GitHub UI
    #[serde(default = "default_label_description")]
    pub description: String,
}

fn default_label_name() -> String {
    "ospa-coverage".to_string()
}

fn default_label_color() -> String {
    "0E8A16".to_string()
}

fn default_label_description() -> String {
    "OSPA coverage tracking (auto-synced from registry)".to_string()
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self {
            name: default_label_name(),
            color: default_label_color(),
            description: default_label_description(),
        }
    }
}
