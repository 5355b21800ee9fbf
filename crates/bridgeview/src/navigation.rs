//! Navigation snapshots and best-effort history tracking.

use serde::{Deserialize, Serialize};

/// Read-only view of where the page is. Passed through to the host as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub url: String,
    pub title: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
    Reload,
}

/// History model for views that only report "load started at URL".
///
/// A started load normally pushes a new entry and drops anything ahead of
/// the cursor. When the load was caused by a back, forward or reload
/// command the cursor moves instead, but only if the loading URL is the
/// entry the command points at. A pending command is consumed by the next
/// load either way. In-page navigations that never fire a load event are
/// invisible to the tracker.
#[derive(Debug, Clone)]
pub struct NavigationTracker {
    entries: Vec<String>,
    cursor: usize,
    title: String,
    loading: bool,
    pending: Option<Traversal>,
}

impl NavigationTracker {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
            cursor: 0,
            title: String::new(),
            loading: false,
            pending: None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current_url(&self) -> &str {
        self.entries.get(self.cursor).map_or("", String::as_str)
    }

    /// Record that a back command was issued. Ignored with no history.
    pub fn expect_back(&mut self) {
        if self.can_go_back() {
            self.pending = Some(Traversal::Back);
        }
    }

    pub fn expect_forward(&mut self) {
        if self.can_go_forward() {
            self.pending = Some(Traversal::Forward);
        }
    }

    pub fn expect_reload(&mut self) {
        self.pending = Some(Traversal::Reload);
    }

    pub fn load_started(&mut self, url: &str) -> NavigationState {
        match self.pending.take() {
            Some(Traversal::Back) if self.is_entry(self.cursor.wrapping_sub(1), url) => {
                self.cursor -= 1
            }
            Some(Traversal::Forward) if self.is_entry(self.cursor + 1, url) => self.cursor += 1,
            Some(Traversal::Reload) if self.current_url() == url => {}
            _ => {
                if self.current_url() != url {
                    self.entries.truncate(self.cursor + 1);
                    self.entries.push(url.to_string());
                    self.cursor = self.entries.len() - 1;
                }
            }
        }
        self.replace_current(url);
        self.loading = true;
        self.snapshot()
    }

    pub fn load_finished(&mut self, url: &str) -> NavigationState {
        // Redirects land on a different URL than the one that started.
        self.replace_current(url);
        self.loading = false;
        self.snapshot()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn snapshot(&self) -> NavigationState {
        NavigationState {
            url: self.current_url().to_string(),
            title: self.title.clone(),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            loading: self.loading,
        }
    }

    fn is_entry(&self, index: usize, url: &str) -> bool {
        self.entries.get(index).is_some_and(|e| e == url)
    }

    fn replace_current(&mut self, url: &str) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            if entry != url {
                *entry = url.to_string();
            }
        }
    }
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
