use std::sync::{Arc, Mutex};

use bridgeview_common::{BridgeError, MessageBus};
use bridgeview_config::{NavigationConfig, WebViewOptions};
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::navigation::NavigationTracker;
use crate::script::BRIDGE_INIT_SCRIPT;

use super::handlers::{self, NavigationPredicate};
use super::{native_error, EventQueue, SharedTracker, WryView};

const BLANK_PAGE: &str = "<html><body></body></html>";

impl WryView {
    /// Create a WebView as a child of `window`, positioned at `bounds`.
    ///
    /// Bridge messages posted by the page are published on `bus`. Top-level
    /// navigations must pass the `navigation` allowlist and, when given,
    /// `should_start`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        options: &WebViewOptions,
        navigation: &NavigationConfig,
        should_start: Option<NavigationPredicate>,
        bus: &MessageBus,
    ) -> Result<Self, BridgeError> {
        let events: EventQueue = Arc::default();
        let initial_url = options
            .url
            .clone()
            .unwrap_or_else(|| "about:blank".to_string());
        let tracker: SharedTracker =
            Arc::new(Mutex::new(NavigationTracker::new(initial_url.clone())));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(options.transparent)
            .with_devtools(options.devtools)
            .with_clipboard(options.clipboard)
            .with_autoplay(options.autoplay)
            .with_incognito(!options.dom_storage_enabled)
            .with_focused(false);

        if options.javascript_enabled {
            builder = builder.with_initialization_script(BRIDGE_INIT_SCRIPT);
            if let Some(js) = &options.injected_javascript {
                builder = builder.with_initialization_script(js);
            }
        } else {
            warn!("javascript disabled, the page cannot send bridge messages");
            if options.injected_javascript.is_some() {
                warn!("injected_javascript ignored while javascript is disabled");
            }
            builder = builder.with_javascript_disabled();
        }

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_ipc_handler(builder, bus.clone());
        builder =
            handlers::attach_page_load_handler(builder, Arc::clone(&events), Arc::clone(&tracker));
        builder = handlers::attach_title_handler(builder, Arc::clone(&events), Arc::clone(&tracker));
        builder = handlers::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            navigation.clone(),
            should_start,
        );

        builder = match (&options.url, &options.html) {
            (Some(url), _) => builder.with_url(url),
            (None, Some(html)) => builder.with_html(html),
            (None, None) => builder.with_html(BLANK_PAGE),
        };

        let webview = builder.build_as_child(window).map_err(native_error)?;

        debug!(url = %initial_url, "WebView created");

        Ok(Self {
            webview,
            events,
            tracker,
        })
    }
}
