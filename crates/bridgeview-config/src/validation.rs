//! Configuration validation.
//!
//! Every check runs; all failures are joined into a single `ConfigError`.

use bridgeview_common::ConfigError;

use crate::schema::BridgeViewConfig;

const MIN_WINDOW_EXTENT: u32 = 100;
const MAX_WINDOW_EXTENT: u32 = 10_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BridgeViewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_webview(&mut errors, config);
    validate_navigation(&mut errors, config);
    validate_range(
        &mut errors,
        "window.width",
        config.window.width,
        MIN_WINDOW_EXTENT,
        MAX_WINDOW_EXTENT,
    );
    validate_range(
        &mut errors,
        "window.height",
        config.window.height,
        MIN_WINDOW_EXTENT,
        MAX_WINDOW_EXTENT,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_webview(errors: &mut Vec<String>, config: &BridgeViewConfig) {
    let wv = &config.webview;
    if wv.url.is_some() && wv.html.is_some() {
        errors.push("webview.url and webview.html are mutually exclusive".into());
    }
    if matches!(wv.url.as_deref(), Some(u) if u.trim().is_empty()) {
        errors.push("webview.url must not be empty".into());
    }
}

fn validate_navigation(errors: &mut Vec<String>, config: &BridgeViewConfig) {
    for (i, prefix) in config.navigation.allowlist.iter().enumerate() {
        if prefix.trim().is_empty() {
            errors.push(format!("navigation.allowlist[{i}] must not be empty"));
        }
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
