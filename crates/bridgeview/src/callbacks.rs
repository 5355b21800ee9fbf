//! Host-supplied callbacks. Every callback is optional; absent ones are
//! skipped silently.

use std::fmt;
use std::sync::Arc;

use crate::navigation::NavigationState;
use crate::state::ErrorInfo;

pub(crate) type MessageFn = Arc<dyn Fn(&str) + Send + Sync>;
type NavigationFn = Arc<dyn Fn(&NavigationState) + Send + Sync>;
type ErrorFn = Arc<dyn Fn(&ErrorInfo) + Send + Sync>;
type NotifyFn = Arc<dyn Fn() + Send + Sync>;
type RenderLoadingFn<O> = Arc<dyn Fn() -> O + Send + Sync>;
type RenderErrorFn<O> = Arc<dyn Fn(&str, i64, &str) -> O + Send + Sync>;

/// Callbacks a host registers on a [`crate::BridgeView`].
///
/// `O` is whatever the host's placeholder renderers produce.
pub struct BridgeCallbacks<O = ()> {
    pub(crate) on_bridge_message: Option<MessageFn>,
    pub(crate) on_load_start: Option<NavigationFn>,
    pub(crate) on_load: Option<NavigationFn>,
    pub(crate) on_load_end: Option<NotifyFn>,
    pub(crate) on_error: Option<ErrorFn>,
    pub(crate) on_navigation_state_change: Option<NavigationFn>,
    pub(crate) render_loading: Option<RenderLoadingFn<O>>,
    pub(crate) render_error: Option<RenderErrorFn<O>>,
}

impl<O> BridgeCallbacks<O> {
    pub fn new() -> Self {
        Self {
            on_bridge_message: None,
            on_load_start: None,
            on_load: None,
            on_load_end: None,
            on_error: None,
            on_navigation_state_change: None,
            render_loading: None,
            render_error: None,
        }
    }

    /// Called with every message the page sends over the bridge.
    pub fn on_bridge_message(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_bridge_message = Some(Arc::new(f));
        self
    }

    pub fn on_load_start(mut self, f: impl Fn(&NavigationState) + Send + Sync + 'static) -> Self {
        self.on_load_start = Some(Arc::new(f));
        self
    }

    pub fn on_load(mut self, f: impl Fn(&NavigationState) + Send + Sync + 'static) -> Self {
        self.on_load = Some(Arc::new(f));
        self
    }

    /// Called after every load, successful or not.
    pub fn on_load_end(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_load_end = Some(Arc::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&ErrorInfo) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub fn on_navigation_state_change(
        mut self,
        f: impl Fn(&NavigationState) + Send + Sync + 'static,
    ) -> Self {
        self.on_navigation_state_change = Some(Arc::new(f));
        self
    }

    /// Placeholder shown while the view is in the loading state.
    pub fn render_loading(mut self, f: impl Fn() -> O + Send + Sync + 'static) -> Self {
        self.render_loading = Some(Arc::new(f));
        self
    }

    /// Placeholder shown for a load error, given `(domain, code, description)`.
    pub fn render_error(mut self, f: impl Fn(&str, i64, &str) -> O + Send + Sync + 'static) -> Self {
        self.render_error = Some(Arc::new(f));
        self
    }

    pub fn has_bridge_message_handler(&self) -> bool {
        self.on_bridge_message.is_some()
    }

    pub(crate) fn bridge_message(&self, message: &str) {
        if let Some(f) = &self.on_bridge_message {
            f(message);
        }
    }

    pub(crate) fn load_start(&self, nav: &NavigationState) {
        if let Some(f) = &self.on_load_start {
            f(nav);
        }
    }

    pub(crate) fn load(&self, nav: &NavigationState) {
        if let Some(f) = &self.on_load {
            f(nav);
        }
    }

    pub(crate) fn load_end(&self) {
        if let Some(f) = &self.on_load_end {
            f();
        }
    }

    pub(crate) fn error(&self, info: &ErrorInfo) {
        if let Some(f) = &self.on_error {
            f(info);
        }
    }

    pub(crate) fn navigation_state_change(&self, nav: &NavigationState) {
        if let Some(f) = &self.on_navigation_state_change {
            f(nav);
        }
    }
}

impl<O> Default for BridgeCallbacks<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for BridgeCallbacks<O> {
    fn clone(&self) -> Self {
        Self {
            on_bridge_message: self.on_bridge_message.clone(),
            on_load_start: self.on_load_start.clone(),
            on_load: self.on_load.clone(),
            on_load_end: self.on_load_end.clone(),
            on_error: self.on_error.clone(),
            on_navigation_state_change: self.on_navigation_state_change.clone(),
            render_loading: self.render_loading.clone(),
            render_error: self.render_error.clone(),
        }
    }
}

impl<O> fmt::Debug for BridgeCallbacks<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeCallbacks")
            .field("on_bridge_message", &self.on_bridge_message.is_some())
            .field("on_load_start", &self.on_load_start.is_some())
            .field("on_load", &self.on_load.is_some())
            .field("on_load_end", &self.on_load_end.is_some())
            .field("on_error", &self.on_error.is_some())
            .field(
                "on_navigation_state_change",
                &self.on_navigation_state_change.is_some(),
            )
            .field("render_loading", &self.render_loading.is_some())
            .field("render_error", &self.render_error.is_some())
            .finish()
    }
}
