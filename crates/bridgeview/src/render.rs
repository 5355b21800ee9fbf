//! Render switch: display state to what is on screen.

use tracing::error;

use crate::callbacks::BridgeCallbacks;
use crate::state::{DisplayState, ErrorInfo};

/// Whether the WebView takes part in layout.
///
/// A hidden WebView stays mounted and keeps loading in the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebLayout {
    Visible,
    Hidden,
}

/// Result of one render: WebView layout plus an optional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<O> {
    pub web: WebLayout,
    pub overlay: Option<O>,
}

pub fn web_layout(state: DisplayState) -> WebLayout {
    match state {
        DisplayState::Idle => WebLayout::Visible,
        DisplayState::Loading | DisplayState::Error => WebLayout::Hidden,
    }
}

pub fn render_switch<O>(
    state: DisplayState,
    last_error: Option<&ErrorInfo>,
    callbacks: &BridgeCallbacks<O>,
) -> Frame<O> {
    let web = web_layout(state);
    let overlay = match state {
        DisplayState::Idle => None,
        DisplayState::Loading => callbacks.render_loading.as_ref().map(|f| f()),
        DisplayState::Error => match last_error {
            Some(info) => callbacks
                .render_error
                .as_ref()
                .map(|f| f(info.domain.as_str(), info.code, info.description.as_str())),
            None => {
                error!("display state is error but no load error was recorded");
                None
            }
        },
    };
    Frame { web, overlay }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderers() -> BridgeCallbacks<String> {
        BridgeCallbacks::new()
            .render_loading(|| "spinner".to_string())
            .render_error(|domain, code, desc| format!("{domain}|{code}|{desc}"))
    }

    #[test]
    fn idle_shows_webview_without_overlay() {
        let frame = render_switch(DisplayState::Idle, None, &renderers());
        assert_eq!(frame.web, WebLayout::Visible);
        assert_eq!(frame.overlay, None);
    }

    #[test]
    fn loading_hides_webview_and_shows_placeholder() {
        let frame = render_switch(DisplayState::Loading, None, &renderers());
        assert_eq!(frame.web, WebLayout::Hidden);
        assert_eq!(frame.overlay.as_deref(), Some("spinner"));
    }

    #[test]
    fn loading_without_renderer_has_no_overlay() {
        let frame = render_switch::<String>(DisplayState::Loading, None, &BridgeCallbacks::new());
        assert_eq!(frame.web, WebLayout::Hidden);
        assert!(frame.overlay.is_none());
    }

    #[test]
    fn error_passes_literal_error_fields() {
        let info = ErrorInfo::new("NET", -6, "timeout");
        let frame = render_switch(DisplayState::Error, Some(&info), &renderers());
        assert_eq!(frame.web, WebLayout::Hidden);
        assert_eq!(frame.overlay.as_deref(), Some("NET|-6|timeout"));
    }

    #[test]
    fn error_without_info_renders_nothing() {
        let frame = render_switch(DisplayState::Error, None, &renderers());
        assert_eq!(frame.web, WebLayout::Hidden);
        assert!(frame.overlay.is_none());
    }
}
