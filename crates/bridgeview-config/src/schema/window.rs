//! Host window settings for the demo application.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in logical pixels (valid range: 100-10000).
    pub width: u32,
    /// Initial height in logical pixels (valid range: 100-10000).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "bridgeview".into(),
            width: 1024,
            height: 768,
        }
    }
}
