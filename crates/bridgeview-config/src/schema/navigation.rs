//! Navigation policy.

use serde::{Deserialize, Serialize};

/// Top-level navigation allowlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Allowed URL prefixes. An empty list allows every URL.
    pub allowlist: Vec<String>,
    /// Description reported with the load error when a navigation is blocked.
    pub block_message: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            allowlist: Vec::new(),
            block_message: "navigation blocked by allowlist".into(),
        }
    }
}

impl NavigationConfig {
    /// Whether `url` passes the allowlist.
    pub fn is_allowed(&self, url: &str) -> bool {
        self.allowlist.is_empty() || self.allowlist.iter().any(|p| url.starts_with(p.as_str()))
    }
}
