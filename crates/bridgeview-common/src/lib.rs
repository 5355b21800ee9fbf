pub mod bus;
pub mod errors;
pub mod id;

pub use bus::{BridgePayload, MessageBus, Subscription, BRIDGE_MESSAGE_EVENT};
pub use errors::{BridgeError, BridgeViewError, ConfigError};
pub use id::ViewId;

pub type Result<T> = std::result::Result<T, BridgeViewError>;
