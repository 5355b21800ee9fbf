use std::sync::Arc;

use bridgeview_common::{MessageBus, BRIDGE_MESSAGE_EVENT};
use bridgeview_config::NavigationConfig;
use tracing::{debug, warn};
use wry::{PageLoadEvent, WebViewBuilder};

use crate::native::NativeEvent;
use crate::script::parse_envelope;
use crate::state::ErrorInfo;

use super::{EventQueue, SharedTracker};

/// Error domain reported when the allowlist blocks a navigation.
pub const NAVIGATION_ERROR_DOMAIN: &str = "navigation";
/// Error code reported when a navigation is blocked.
pub const NAVIGATION_BLOCKED_CODE: i64 = 403;

const HOST_REJECTED_MESSAGE: &str = "navigation rejected by host";

/// Host hook consulted for every top-level navigation. Returning `false`
/// cancels it.
pub type NavigationPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

pub fn blocked_navigation_error(url: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(
        NAVIGATION_ERROR_DOMAIN,
        NAVIGATION_BLOCKED_CODE,
        format!("{message}: {url}"),
    )
}

/// Decide whether `url` may load.
///
/// The allowlist is checked first, then the host predicate. Both must pass.
pub fn check_navigation(
    policy: &NavigationConfig,
    predicate: Option<&NavigationPredicate>,
    url: &str,
) -> Result<(), ErrorInfo> {
    if !policy.is_allowed(url) {
        return Err(blocked_navigation_error(url, &policy.block_message));
    }
    match predicate {
        Some(allow) if !allow(url) => Err(blocked_navigation_error(url, HOST_REJECTED_MESSAGE)),
        _ => Ok(()),
    }
}

fn push(events: &EventQueue, event: NativeEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    bus: MessageBus,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        match parse_envelope(body) {
            Ok(payload) => {
                let delivered = bus.publish(BRIDGE_MESSAGE_EVENT, &payload);
                debug!(len = payload.message.len(), delivered, "bridge message from page");
            }
            Err(e) => {
                warn!(body_len = body.len(), error = %e, "IPC message rejected");
            }
        }
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
    tracker: SharedTracker,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let Ok(mut t) = tracker.lock() else {
            return;
        };
        let (native, phase) = match event {
            PageLoadEvent::Started => (NativeEvent::LoadStart(t.load_started(&url)), "started"),
            PageLoadEvent::Finished => (NativeEvent::LoadFinish(t.load_finished(&url)), "finished"),
        };
        drop(t);
        debug!(url = %url, phase, "page load");
        push(&events, native);
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
    tracker: SharedTracker,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(title = %title, "title changed");
        if let Ok(mut t) = tracker.lock() {
            t.set_title(title);
        }
        push(&events, NativeEvent::ContentChanged { message: None });
    })
}

pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
    policy: NavigationConfig,
    predicate: Option<NavigationPredicate>,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        match check_navigation(&policy, predicate.as_ref(), &url) {
            Ok(()) => {
                debug!(url = %url, "navigation allowed");
                true
            }
            Err(info) => {
                warn!(url = %url, reason = %info.description, "navigation blocked");
                push(&events, NativeEvent::LoadError(info));
                false
            }
        }
    })
}
