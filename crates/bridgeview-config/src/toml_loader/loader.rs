//! Core TOML config loading: read from path or platform default.

use std::io::ErrorKind;
use std::path::Path;

use bridgeview_common::ConfigError;
use tracing::info;

use crate::schema::{BridgeViewConfig, LoggingConfig};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. The result is not validated;
/// [`crate::load_config`] does that after migrating legacy options.
pub fn load_from_path(path: &Path) -> Result<BridgeViewConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: BridgeViewConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/bridgeview/config.toml`
/// On macOS: `~/Library/Application Support/bridgeview/config.toml`
///
/// A commented default file is written when none exists.
pub fn load_default() -> Result<BridgeViewConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(BridgeViewConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// The `[logging]` section of the config at `path`, or at the default path.
///
/// Reads quietly and gives up on any failure, so a host can choose its log
/// filter before a subscriber exists and then load the config for real.
pub fn peek_logging(path: Option<&Path>) -> Option<LoggingConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path().ok()?,
    };
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str::<BridgeViewConfig>(&content)
        .ok()
        .map(|config| config.logging)
}
