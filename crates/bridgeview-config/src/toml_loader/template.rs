//! Default TOML config template with inline documentation comments.

/// Default TOML config content.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# bridgeview configuration
# Only override what you want to change -- missing fields use defaults.

[webview]
# url = "https://example.com"       # mutually exclusive with html
# html = "<h1>hello</h1>"
# javascript_enabled = true
# dom_storage_enabled = true
# user_agent = "bridgeview/0.1.0"
# devtools = false
# transparent = false
# autoplay = true
# clipboard = true
# start_in_loading_state = false     # show the loading placeholder until the first load finishes
# injected_javascript = "window.webBridge.onMessage(console.log);"   # runs after the bridge script

[navigation]
# allowlist = []                     # URL prefixes; empty allows everything
# block_message = "navigation blocked by allowlist"

[window]
# title = "bridgeview"
# width = 1024                       # 100-10000
# height = 768                       # 100-10000

[logging]
# level = "info"                     # trace, debug, info, warn, error
"##
}
