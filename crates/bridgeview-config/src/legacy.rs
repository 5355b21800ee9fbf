//! Migration of deprecated WebView options.
//!
//! Older configs spell two options with an `_android` suffix. When present,
//! their value wins over the current option and a deprecation notice is
//! logged once per process.

use std::sync::Once;

use tracing::warn;

use crate::schema::WebViewOptions;

/// A deprecated option that was folded into its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    pub legacy: &'static str,
    pub replacement: &'static str,
    pub value: bool,
}

static JAVASCRIPT_NOTICE: Once = Once::new();
static DOM_STORAGE_NOTICE: Once = Once::new();

/// Fold deprecated flags into `options`, clearing them afterwards.
///
/// Returns the migrations that were applied.
pub fn migrate_legacy(options: &mut WebViewOptions) -> Vec<Deprecation> {
    let mut applied = Vec::new();

    if let Some(value) = options.javascript_enabled_android.take() {
        options.javascript_enabled = value;
        let d = Deprecation {
            legacy: "javascript_enabled_android",
            replacement: "javascript_enabled",
            value,
        };
        notice_once(&JAVASCRIPT_NOTICE, &d);
        applied.push(d);
    }

    if let Some(value) = options.dom_storage_enabled_android.take() {
        options.dom_storage_enabled = value;
        let d = Deprecation {
            legacy: "dom_storage_enabled_android",
            replacement: "dom_storage_enabled",
            value,
        };
        notice_once(&DOM_STORAGE_NOTICE, &d);
        applied.push(d);
    }

    applied
}

/// Log `d` the first time `once` fires. Returns whether it logged.
fn notice_once(once: &Once, d: &Deprecation) -> bool {
    let mut logged = false;
    once.call_once(|| {
        warn!(
            legacy = d.legacy,
            replacement = d.replacement,
            "`{}` is deprecated, use `{}` instead",
            d.legacy,
            d.replacement
        );
        logged = true;
    });
    logged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_legacy_flags_is_a_no_op() {
        let mut opts = WebViewOptions::default();
        let before = opts.clone();
        assert!(migrate_legacy(&mut opts).is_empty());
        assert_eq!(opts, before);
    }

    #[test]
    fn legacy_javascript_flag_overrides_current() {
        let mut opts = WebViewOptions {
            javascript_enabled: true,
            javascript_enabled_android: Some(false),
            ..Default::default()
        };
        let applied = migrate_legacy(&mut opts);
        assert!(!opts.javascript_enabled);
        assert_eq!(opts.javascript_enabled_android, None);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].replacement, "javascript_enabled");
        assert!(!applied[0].value);
    }

    #[test]
    fn legacy_dom_storage_flag_overrides_current() {
        let mut opts = WebViewOptions {
            dom_storage_enabled: false,
            dom_storage_enabled_android: Some(true),
            ..Default::default()
        };
        migrate_legacy(&mut opts);
        assert!(opts.dom_storage_enabled);
        assert_eq!(opts.dom_storage_enabled_android, None);
    }

    #[test]
    fn both_flags_migrate_together() {
        let mut opts = WebViewOptions {
            javascript_enabled_android: Some(false),
            dom_storage_enabled_android: Some(false),
            ..Default::default()
        };
        let applied = migrate_legacy(&mut opts);
        assert_eq!(applied.len(), 2);
        assert!(!opts.javascript_enabled);
        assert!(!opts.dom_storage_enabled);
    }

    #[test]
    fn migration_is_idempotent() {
        let mut opts = WebViewOptions {
            javascript_enabled_android: Some(false),
            ..Default::default()
        };
        migrate_legacy(&mut opts);
        assert!(migrate_legacy(&mut opts).is_empty());
        assert!(!opts.javascript_enabled);
    }

    #[test]
    fn notice_fires_only_once() {
        let once = Once::new();
        let d = Deprecation {
            legacy: "a",
            replacement: "b",
            value: true,
        };
        assert!(notice_once(&once, &d));
        assert!(!notice_once(&once, &d));
        assert!(!notice_once(&once, &d));
    }
}
