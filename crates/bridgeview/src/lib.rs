//! A WebView component with a string message bridge.
//!
//! `BridgeView` sits between a host application and a native WebView:
//! - Tracks a three-way display state (idle / loading / error)
//! - Relays native lifecycle events to host callbacks
//! - Delivers page -> host bridge messages from the process-wide bus
//! - Sends fire-and-forget commands (back, forward, reload, send) to the view
//! - Decides whether the WebView or a placeholder is shown
//!
//! The native side is reached through the [`NativeView`] trait; a `wry`
//! implementation lives in [`wry_backend`].

pub mod callbacks;
pub mod native;
pub mod navigation;
pub mod render;
pub mod script;
pub mod state;
pub mod view;
pub mod wry_backend;

pub use callbacks::BridgeCallbacks;
pub use native::{NativeEvent, NativeView, ViewCommand};
pub use navigation::{NavigationState, NavigationTracker};
pub use render::{render_switch, web_layout, Frame, WebLayout};
pub use state::{DisplayState, DisplayStateHolder, ErrorInfo};
pub use view::BridgeView;
pub use wry_backend::{NavigationPredicate, WryView};
