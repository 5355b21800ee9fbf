//! Display state: which of the WebView, the loading placeholder or the
//! error placeholder is on screen.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::native::NativeEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Idle,
    Loading,
    Error,
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error => "error",
        })
    }
}

/// A native load failure, exactly as the platform reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub domain: String,
    pub code: i64,
    pub description: String,
}

impl ErrorInfo {
    pub fn new(domain: impl Into<String>, code: i64, description: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            description: description.into(),
        }
    }
}

/// Current display state plus the most recent load error.
///
/// Only lifecycle events move the state. At most one `ErrorInfo` is kept:
/// a new error replaces it and a finished load clears it.
#[derive(Debug, Clone)]
pub struct DisplayStateHolder {
    state: DisplayState,
    last_error: Option<ErrorInfo>,
}

impl DisplayStateHolder {
    pub fn new(start_in_loading: bool) -> Self {
        Self {
            state: if start_in_loading {
                DisplayState::Loading
            } else {
                DisplayState::Idle
            },
            last_error: None,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.last_error.as_ref()
    }

    /// Apply a native event and return the resulting state.
    ///
    /// The result depends only on the event, never on the prior state;
    /// load-start and content changes leave the state untouched.
    pub fn apply(&mut self, event: &NativeEvent) -> DisplayState {
        match event {
            NativeEvent::LoadError(info) => {
                self.state = DisplayState::Error;
                self.last_error = Some(info.clone());
            }
            NativeEvent::LoadFinish(_) => {
                self.state = DisplayState::Idle;
                self.last_error = None;
            }
            NativeEvent::LoadStart(_) | NativeEvent::ContentChanged { .. } => {}
        }
        self.state
    }
}
