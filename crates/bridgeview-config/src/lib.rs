//! Configuration for bridged WebView hosts.
//!
//! TOML-based, with serde defaults for every field, validation that
//! reports all problems at once, and a migration shim for deprecated
//! option names.

pub mod legacy;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use legacy::{migrate_legacy, Deprecation};
pub use schema::{
    BridgeViewConfig, LogLevel, LoggingConfig, NavigationConfig, WebViewOptions, WindowConfig,
};

use std::path::Path;

use bridgeview_common::ConfigError;

/// Load, migrate and validate a config.
///
/// Reads `path` when given, otherwise the platform default (created on
/// first run). Deprecated options are folded into their replacements
/// before validation.
pub fn load_config(path: Option<&Path>) -> Result<BridgeViewConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    migrate_legacy(&mut config.webview);
    validation::validate(&config)?;
    Ok(config)
}
