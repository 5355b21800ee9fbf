//! Process-wide message bus keyed by event name.
//!
//! Native code publishes bridge messages under a well-known name and every
//! mounted view listens for them. Listeners are held by a [`Subscription`]
//! guard: dropping the guard removes the listener, so a view that has gone
//! away can never be called back.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, Weak};

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Event name carrying `{ "message": string }` payloads from the page.
pub const BRIDGE_MESSAGE_EVENT: &str = "bridgeMessage";

/// Payload delivered on [`BRIDGE_MESSAGE_EVENT`]. The message is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgePayload {
    pub message: String,
}

impl BridgePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type Callback = Arc<dyn Fn(&BridgePayload) + Send + Sync>;

struct Listener {
    id: u64,
    active: Arc<AtomicBool>,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<String, Vec<Listener>>,
}

static GLOBAL: OnceLock<MessageBus> = OnceLock::new();

/// Cloneable handle to a bus. Clones share the same listener table.
#[derive(Clone, Default)]
pub struct MessageBus {
    inner: Arc<Mutex<Registry>>,
}

impl MessageBus {
    /// Create a private bus, independent of [`MessageBus::global`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide bus native backends publish on.
    pub fn global() -> &'static MessageBus {
        GLOBAL.get_or_init(MessageBus::new)
    }

    /// Register `callback` for events named `name`.
    ///
    /// The callback stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription immediately unsubscribes"]
    pub fn subscribe<F>(&self, name: &str, callback: F) -> Subscription
    where
        F: Fn(&BridgePayload) + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let id = match self.inner.lock() {
            Ok(mut reg) => {
                reg.next_id += 1;
                let id = reg.next_id;
                reg.listeners
                    .entry(name.to_string())
                    .or_default()
                    .push(Listener {
                        id,
                        active: Arc::clone(&active),
                        callback: Arc::new(callback),
                    });
                id
            }
            Err(_) => {
                warn!(event = name, "message bus poisoned, subscription inert");
                active.store(false, Ordering::SeqCst);
                0
            }
        };
        trace!(event = name, id, "subscribed");

        Subscription {
            bus: Arc::downgrade(&self.inner),
            name: name.to_string(),
            id,
            active,
        }
    }

    /// Deliver `payload` to every listener of `name`, in subscription order.
    ///
    /// Listeners run synchronously on the calling thread, outside the bus
    /// lock. Returns how many listeners were invoked.
    pub fn publish(&self, name: &str, payload: &BridgePayload) -> usize {
        let listeners: Vec<(Arc<AtomicBool>, Callback)> = match self.inner.lock() {
            Ok(reg) => reg
                .listeners
                .get(name)
                .map(|ls| {
                    ls.iter()
                        .map(|l| (Arc::clone(&l.active), Arc::clone(&l.callback)))
                        .collect()
                })
                .unwrap_or_default(),
            Err(_) => {
                warn!(event = name, "message bus poisoned, dropping event");
                return 0;
            }
        };

        let mut delivered = 0;
        for (active, callback) in listeners {
            // An earlier listener may have released this one mid-publish.
            if active.load(Ordering::SeqCst) {
                callback(payload);
                delivered += 1;
            }
        }
        trace!(event = name, delivered, "published");
        delivered
    }

    /// Number of live listeners for `name`.
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.inner
            .lock()
            .map(|reg| reg.listeners.get(name).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .inner
            .lock()
            .map(|reg| reg.listeners.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("MessageBus").field("events", &names).finish()
    }
}

/// Guard for a registered listener. Released on drop.
pub struct Subscription {
    bus: Weak<Mutex<Registry>>,
    name: String,
    id: u64,
    active: Arc<AtomicBool>,
}

impl Subscription {
    pub fn event_name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Release the listener now instead of at end of scope.
    pub fn unsubscribe(self) {}

    fn release(&mut self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        let Some(inner) = self.bus.upgrade() else {
            return;
        };
        if let Ok(mut reg) = inner.lock() {
            if let Some(ls) = reg.listeners.get_mut(&self.name) {
                ls.retain(|l| l.id != self.id);
                if ls.is_empty() {
                    reg.listeners.remove(&self.name);
                }
            }
        }
        trace!(event = %self.name, id = self.id, "unsubscribed");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.name)
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
