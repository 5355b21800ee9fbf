//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod navigation;
mod webview;
mod window;

pub use logging::*;
pub use navigation::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a bridged WebView host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeViewConfig {
    pub webview: WebViewOptions,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
