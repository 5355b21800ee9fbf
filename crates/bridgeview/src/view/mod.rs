//! The bridged WebView component.
//!
//! A `BridgeView` owns its display state and, while mounted, a native view
//! handle plus one subscription to the bridge message event. Unmounting
//! (or dropping) releases both, after which no host callback is invoked.

use bridgeview_common::{MessageBus, Subscription, ViewId, BRIDGE_MESSAGE_EVENT};
use bridgeview_config::WebViewOptions;
use tracing::{debug, info, warn};

use crate::callbacks::BridgeCallbacks;
use crate::native::{NativeEvent, NativeView};
use crate::navigation::NavigationState;
use crate::render::{render_switch, web_layout, Frame, WebLayout};
use crate::state::{DisplayState, DisplayStateHolder, ErrorInfo};

mod commands;

#[cfg(test)]
mod tests;

struct Mounted<V> {
    view: V,
    _subscription: Subscription,
}

pub struct BridgeView<V: NativeView, O = ()> {
    id: ViewId,
    display: DisplayStateHolder,
    callbacks: BridgeCallbacks<O>,
    navigation: Option<NavigationState>,
    mounted: Option<Mounted<V>>,
}

impl<V: NativeView, O> BridgeView<V, O> {
    pub fn new(start_in_loading: bool, callbacks: BridgeCallbacks<O>) -> Self {
        Self {
            id: ViewId::new(),
            display: DisplayStateHolder::new(start_in_loading),
            callbacks,
            navigation: None,
            mounted: None,
        }
    }

    pub fn from_options(options: &WebViewOptions, callbacks: BridgeCallbacks<O>) -> Self {
        Self::new(options.start_in_loading_state, callbacks)
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn display_state(&self) -> DisplayState {
        self.display.state()
    }

    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.display.last_error()
    }

    /// Most recent navigation snapshot seen on a load event.
    pub fn navigation(&self) -> Option<&NavigationState> {
        self.navigation.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// The live native view, if mounted.
    pub fn native(&self) -> Option<&V> {
        self.mounted.as_ref().map(|m| &m.view)
    }

    /// Attach a native view and start listening for bridge messages on `bus`.
    ///
    /// Mounting an already-mounted view replaces the previous handle and
    /// subscription.
    pub fn mount(&mut self, view: V, bus: &MessageBus) {
        if self.mounted.is_some() {
            warn!(view_id = %self.id.short(), "mount on a mounted view, replacing handle");
            self.unmount();
        }

        let relay = self.callbacks.on_bridge_message.clone();
        let view_id = self.id.short().to_string();
        let subscription = bus.subscribe(BRIDGE_MESSAGE_EVENT, move |payload| {
            debug!(view_id = %view_id, len = payload.message.len(), "bridge message");
            if let Some(f) = &relay {
                f(payload.message.as_str());
            }
        });

        self.mounted = Some(Mounted {
            view,
            _subscription: subscription,
        });
        info!(view_id = %self.id.short(), state = %self.display.state(), "view mounted");
        self.sync_visibility();
    }

    /// Release the subscription and hand back the native view.
    pub fn unmount(&mut self) -> Option<V> {
        let mounted = self.mounted.take()?;
        info!(view_id = %self.id.short(), "view unmounted");
        Some(mounted.view)
    }

    /// Feed one native event through the state holder and host callbacks.
    ///
    /// Events arriving while unmounted are dropped.
    pub fn handle_native_event(&mut self, event: NativeEvent) {
        if self.mounted.is_none() {
            debug!(view_id = %self.id.short(), ?event, "native event while unmounted, dropped");
            return;
        }

        let before = self.display.state();
        let after = self.display.apply(&event);
        if before != after {
            debug!(view_id = %self.id.short(), from = %before, to = %after, "display state");
        }

        match event {
            NativeEvent::LoadStart(nav) => {
                self.callbacks.load_start(&nav);
                self.callbacks.navigation_state_change(&nav);
                self.navigation = Some(nav);
            }
            NativeEvent::LoadFinish(nav) => {
                self.callbacks.load(&nav);
                self.callbacks.load_end();
                self.callbacks.navigation_state_change(&nav);
                self.navigation = Some(nav);
            }
            NativeEvent::LoadError(info) => {
                warn!(
                    view_id = %self.id.short(),
                    domain = %info.domain,
                    code = info.code,
                    description = %info.description,
                    "load failed"
                );
                self.callbacks.error(&info);
                self.callbacks.load_end();
            }
            NativeEvent::ContentChanged { message } => {
                if let Some(message) = message {
                    self.callbacks.bridge_message(&message);
                }
            }
        }

        if before != after {
            self.sync_visibility();
        }
    }

    /// Feed a batch of native events in order.
    pub fn handle_native_events(&mut self, events: impl IntoIterator<Item = NativeEvent>) {
        for event in events {
            self.handle_native_event(event);
        }
    }

    /// Current frame: WebView layout and placeholder.
    pub fn render(&self) -> Frame<O> {
        render_switch(
            self.display.state(),
            self.display.last_error(),
            &self.callbacks,
        )
    }

    /// Push the current layout to the native view.
    pub fn sync_visibility(&self) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        let visible = web_layout(self.display.state()) == WebLayout::Visible;
        if let Err(e) = mounted.view.set_visible(visible) {
            warn!(view_id = %self.id.short(), visible, error = %e, "failed to update visibility");
        }
    }
}

impl<V: NativeView, O> Drop for BridgeView<V, O> {
    fn drop(&mut self) {
        self.unmount();
    }
}
