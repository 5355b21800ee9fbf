//! Page side of the bridge.
//!
//! Messages flow in both directions:
//! - **page -> host**: `window.webBridge.send(msg)` posts a JSON envelope
//!   through `window.ipc.postMessage`, which the native IPC handler turns
//!   into a [`BridgePayload`].
//! - **host -> page**: the host evaluates [`js_deliver_message`], which
//!   hands the string to every handler registered with
//!   `window.webBridge.onMessage`.

use bridgeview_common::{BridgeError, BridgePayload};
use serde::Deserialize;

/// Injected into every page before its own scripts run.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.webBridge) {
        return;
    }
    var handlers = [];
    window.webBridge = {
        send: function(message) {
            window.ipc.postMessage(JSON.stringify({
                type: "message",
                message: String(message)
            }));
        },
        onMessage: function(handler) {
            handlers.push(handler);
            return function() {
                var i = handlers.indexOf(handler);
                if (i >= 0) {
                    handlers.splice(i, 1);
                }
            };
        },
        _receive: function(message) {
            handlers.slice().forEach(function(handler) {
                try {
                    handler(message);
                } catch (e) {
                    console.error("webBridge handler failed", e);
                }
            });
            document.dispatchEvent(new MessageEvent("webbridgemessage", { data: message }));
        }
    };
})();
"#;

/// JS snippet delivering `message` to the page's bridge handlers.
pub fn js_deliver_message(message: &str) -> String {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.webBridge && window.webBridge._receive({literal});")
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

/// Parse an IPC body posted by [`BRIDGE_INIT_SCRIPT`].
pub fn parse_envelope(raw: &str) -> Result<BridgePayload, BridgeError> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(|e| BridgeError::InvalidPayload(e.to_string()))?;
    if envelope.kind != "message" {
        return Err(BridgeError::InvalidPayload(format!(
            "unknown envelope type `{}`",
            envelope.kind
        )));
    }
    Ok(BridgePayload::new(envelope.message))
}
