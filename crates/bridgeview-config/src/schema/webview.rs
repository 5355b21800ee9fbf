//! WebView behaviour options.

use serde::{Deserialize, Serialize};

/// Options handed to the native WebView, plus the bridge's own additions.
///
/// `javascript_enabled_android` and `dom_storage_enabled_android` are
/// deprecated spellings of `javascript_enabled` and `dom_storage_enabled`.
/// They are folded into the current options by [`crate::migrate_legacy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewOptions {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial inline HTML (mutually exclusive with `url`).
    pub html: Option<String>,
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub user_agent: Option<String>,
    /// Always on in debug builds.
    pub devtools: bool,
    pub transparent: bool,
    pub autoplay: bool,
    pub clipboard: bool,
    /// Show the loading placeholder until the first load finishes.
    pub start_in_loading_state: bool,
    /// Host script run on every page after the bridge script, so it can
    /// use `window.webBridge`. Ignored when JavaScript is disabled.
    pub injected_javascript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript_enabled_android: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dom_storage_enabled_android: Option<bool>,
}

impl Default for WebViewOptions {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            javascript_enabled: true,
            dom_storage_enabled: true,
            user_agent: Some(concat!("bridgeview/", env!("CARGO_PKG_VERSION")).to_string()),
            devtools: cfg!(debug_assertions),
            transparent: false,
            autoplay: true,
            clipboard: true,
            start_in_loading_state: false,
            injected_javascript: None,
            javascript_enabled_android: None,
            dom_storage_enabled_android: None,
        }
    }
}

impl WebViewOptions {
    /// Options that load a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Options that render inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}
