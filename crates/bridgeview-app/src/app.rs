//! Demo host: one window, one bridged WebView that echoes every message
//! the page sends.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bridgeview::wry_backend::logical_bounds;
use bridgeview::{BridgeCallbacks, BridgeView, NavigationPredicate, WebLayout, WryView};
use bridgeview_common::MessageBus;
use bridgeview_config::BridgeViewConfig;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Schemes the OS would hand to another application.
const EXTERNAL_SCHEMES: &[&str] = &["mailto:", "tel:", "sms:"];

/// Keep the WebView on web content: links that would leave for another
/// application are refused.
fn external_link_filter() -> NavigationPredicate {
    Arc::new(|url: &str| {
        let lower = url.to_ascii_lowercase();
        let external = EXTERNAL_SCHEMES.iter().any(|s| lower.starts_with(s));
        if external {
            tracing::info!(url, "External link ignored");
        }
        !external
    })
}

pub struct BridgeApp {
    config: BridgeViewConfig,
    // Declared before `window` so the WebView is dropped first.
    view: BridgeView<WryView, String>,
    window: Option<Window>,
    inbox: Arc<Mutex<Vec<String>>>,
    modifiers: ModifiersState,
    last_overlay: Option<String>,
}

impl BridgeApp {
    pub fn new(config: BridgeViewConfig) -> Self {
        let inbox: Arc<Mutex<Vec<String>>> = Arc::default();
        let sink = Arc::clone(&inbox);

        let callbacks = BridgeCallbacks::new()
            .on_bridge_message(move |message| {
                tracing::info!(len = message.len(), "Message from page: {message}");
                if let Ok(mut q) = sink.lock() {
                    q.push(message.to_string());
                }
            })
            .on_load_start(|nav| tracing::debug!(url = %nav.url, "Load started"))
            .on_load(|nav| tracing::info!(url = %nav.url, title = %nav.title, "Page loaded"))
            .on_load_end(|| tracing::debug!("Load ended"))
            .on_error(|e| {
                tracing::warn!(domain = %e.domain, code = e.code, "Load failed: {}", e.description)
            })
            .on_navigation_state_change(|nav| {
                tracing::debug!(
                    url = %nav.url,
                    can_go_back = nav.can_go_back,
                    can_go_forward = nav.can_go_forward,
                    loading = nav.loading,
                    "Navigation state"
                )
            })
            .render_loading(|| "Loading...".to_string())
            .render_error(|domain, code, description| {
                format!("Failed to load ({domain} {code}): {description}")
            });

        let view = BridgeView::from_options(&config.webview, callbacks);

        Self {
            config,
            view,
            window: None,
            inbox,
            modifiers: ModifiersState::empty(),
            last_overlay: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let bounds = Self::window_bounds(&window);
        let native = match WryView::create(
            &window,
            bounds,
            &self.config.webview,
            &self.config.navigation,
            Some(external_link_filter()),
            MessageBus::global(),
        ) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        };

        self.view.mount(native, MessageBus::global());
        self.window = Some(window);
        self.apply_frame();
        true
    }

    fn window_bounds(window: &Window) -> wry::Rect {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        logical_bounds(0.0, 0.0, size.width, size.height)
    }

    fn fit_webview(&self) {
        let (Some(window), Some(native)) = (&self.window, self.view.native()) else {
            return;
        };
        if let Err(e) = native.set_bounds(Self::window_bounds(window)) {
            tracing::warn!("Failed to resize webview: {e}");
        }
    }

    /// Drain native events, answer queued page messages, refresh the frame.
    fn poll(&mut self) {
        let events = self
            .view
            .native()
            .map(WryView::drain_events)
            .unwrap_or_default();
        if !events.is_empty() {
            self.view.handle_native_events(events);
            self.apply_frame();
        }

        let messages = match self.inbox.lock() {
            Ok(mut q) => std::mem::take(&mut *q),
            Err(_) => Vec::new(),
        };
        for message in messages {
            self.view.send_to_bridge(format!("echo: {message}"));
        }
    }

    /// Show the placeholder text in the title bar while the WebView is hidden.
    fn apply_frame(&mut self) {
        let frame = self.view.render();
        if frame.overlay == self.last_overlay {
            return;
        }
        if let Some(window) = &self.window {
            let title = match (&frame.web, &frame.overlay) {
                (WebLayout::Hidden, Some(text)) => format!("{} - {text}", self.config.window.title),
                _ => self.config.window.title.clone(),
            };
            window.set_title(&title);
        }
        self.last_overlay = frame.overlay;
    }

    fn handle_key(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        match event.logical_key {
            Key::Named(NamedKey::F5) => self.view.reload(),
            Key::Named(NamedKey::ArrowLeft) if self.modifiers.alt_key() => self.view.go_back(),
            Key::Named(NamedKey::ArrowRight) if self.modifiers.alt_key() => {
                self.view.go_forward()
            }
            Key::Named(NamedKey::F12) => {
                if let Some(native) = self.view.native() {
                    native.open_devtools();
                }
            }
            _ => {}
        }
    }

    fn shutdown(&mut self) {
        if self.view.unmount().is_some() {
            tracing::info!("WebView released");
        }
        self.window = None;
    }
}

impl ApplicationHandler for BridgeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if !self.initialize(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.fit_webview();
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
