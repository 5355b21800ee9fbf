//! `NativeView` backed by a `wry::WebView`.
//!
//! Lifecycle events from wry handlers are queued and drained by the host on
//! its event loop; bridge messages from the page are published straight on
//! the message bus from the IPC handler.

use std::sync::{Arc, Mutex};

use bridgeview_common::BridgeError;
use tracing::warn;
use wry::WebView;

use crate::native::{NativeEvent, NativeView, ViewCommand};
use crate::navigation::{NavigationState, NavigationTracker};
use crate::script::js_deliver_message;

mod handlers;
mod lifecycle;

pub use handlers::{
    blocked_navigation_error, check_navigation, NavigationPredicate, NAVIGATION_BLOCKED_CODE,
    NAVIGATION_ERROR_DOMAIN,
};

pub(crate) type EventQueue = Arc<Mutex<Vec<NativeEvent>>>;
pub(crate) type SharedTracker = Arc<Mutex<NavigationTracker>>;

pub struct WryView {
    webview: WebView,
    events: EventQueue,
    tracker: SharedTracker,
}

impl WryView {
    /// Take every queued native event, oldest first.
    pub fn drain_events(&self) -> Vec<NativeEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => {
                warn!("native event queue poisoned");
                Vec::new()
            }
        }
    }

    /// Current navigation snapshot.
    pub fn navigation(&self) -> NavigationState {
        self.tracker
            .lock()
            .map(|t| t.snapshot())
            .unwrap_or_default()
    }

    /// Position the WebView within its parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), BridgeError> {
        self.webview.set_bounds(bounds).map_err(native_error)
    }

    pub fn focus(&self) -> Result<(), BridgeError> {
        self.webview.focus().map_err(native_error)
    }

    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// The underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }

    fn with_tracker(&self, f: impl FnOnce(&mut NavigationTracker)) {
        if let Ok(mut tracker) = self.tracker.lock() {
            f(&mut tracker);
        }
    }
}

impl NativeView for WryView {
    fn dispatch(&self, command: ViewCommand) -> Result<(), BridgeError> {
        match command {
            ViewCommand::GoBack => {
                self.webview
                    .evaluate_script("history.back();")
                    .map_err(native_error)?;
                self.with_tracker(NavigationTracker::expect_back);
            }
            ViewCommand::GoForward => {
                self.webview
                    .evaluate_script("history.forward();")
                    .map_err(native_error)?;
                self.with_tracker(NavigationTracker::expect_forward);
            }
            ViewCommand::Reload => {
                self.webview.reload().map_err(native_error)?;
                self.with_tracker(NavigationTracker::expect_reload);
            }
            ViewCommand::SendToBridge(message) => {
                self.webview
                    .evaluate_script(&js_deliver_message(&message))
                    .map_err(native_error)?;
            }
        }
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), BridgeError> {
        self.webview.set_visible(visible).map_err(native_error)
    }
}

/// Logical-pixel bounds for a child WebView.
pub fn logical_bounds(x: f64, y: f64, width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(x, y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

fn native_error(e: wry::Error) -> BridgeError {
    BridgeError::Native(e.to_string())
}
