//! Boundary with the native WebView.
//!
//! Events flow up from the view as [`NativeEvent`]s; commands flow down as
//! [`ViewCommand`]s through a [`NativeView`]. Rendering, script execution
//! and the page-side transport all live behind this trait.

use bridgeview_common::BridgeError;

use crate::navigation::NavigationState;
use crate::state::ErrorInfo;

/// Lifecycle and content events reported by a native view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEvent {
    LoadStart(NavigationState),
    LoadFinish(NavigationState),
    LoadError(ErrorInfo),
    /// The view's content changed. Carries a bridge message when the page
    /// delivered one through the view rather than the message bus.
    ContentChanged { message: Option<String> },
}

/// A one-way instruction to the native view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    GoForward,
    GoBack,
    Reload,
    SendToBridge(String),
}

impl ViewCommand {
    /// Logical command name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GoForward => "goForward",
            Self::GoBack => "goBack",
            Self::Reload => "reload",
            Self::SendToBridge(_) => "sendToBridge",
        }
    }
}

/// Handle to a live native WebView.
///
/// Dispatch is best effort: `Ok` means the command was handed to the view,
/// not that it took effect.
pub trait NativeView {
    fn dispatch(&self, command: ViewCommand) -> Result<(), BridgeError>;

    /// Show or hide the view without unloading it.
    fn set_visible(&self, visible: bool) -> Result<(), BridgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names() {
        assert_eq!(ViewCommand::GoForward.name(), "goForward");
        assert_eq!(ViewCommand::GoBack.name(), "goBack");
        assert_eq!(ViewCommand::Reload.name(), "reload");
        assert_eq!(
            ViewCommand::SendToBridge("x".into()).name(),
            "sendToBridge"
        );
    }
}
