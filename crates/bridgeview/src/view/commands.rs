//! Outbound commands. Fire-and-forget: failures are logged, never returned.

use bridgeview_common::BridgeError;
use tracing::{debug, warn};

use crate::native::{NativeView, ViewCommand};

use super::BridgeView;

impl<V: NativeView, O> BridgeView<V, O> {
    pub fn go_forward(&self) {
        self.fire(ViewCommand::GoForward);
    }

    pub fn go_back(&self) {
        self.fire(ViewCommand::GoBack);
    }

    pub fn reload(&self) {
        self.fire(ViewCommand::Reload);
    }

    /// Deliver `message` to the page's bridge handlers.
    pub fn send_to_bridge(&self, message: impl Into<String>) {
        self.fire(ViewCommand::SendToBridge(message.into()));
    }

    /// Dispatch `command`, reporting a missing handle or native failure.
    pub fn try_dispatch(&self, command: ViewCommand) -> Result<(), BridgeError> {
        let mounted = self.mounted.as_ref().ok_or(BridgeError::NotMounted)?;
        debug!(view_id = %self.id.short(), command = command.name(), "dispatch");
        mounted.view.dispatch(command)
    }

    fn fire(&self, command: ViewCommand) {
        let name = command.name();
        if let Err(e) = self.try_dispatch(command) {
            warn!(view_id = %self.id.short(), command = name, error = %e, "command dropped");
        }
    }
}
