use std::path::PathBuf;

use bridgeview_common::BridgeViewError;
use bridgeview_config::BridgeViewConfig;
use clap::Parser;

/// bridgeview: a WebView with a two-way string message bridge.
#[derive(Parser, Debug)]
#[command(name = "bridgeview", version, about)]
pub struct Args {
    /// URL to open, overriding the config file.
    #[arg(long)]
    pub url: Option<String>,

    /// Render a local HTML file instead of a URL.
    #[arg(long, conflicts_with = "url")]
    pub html_file: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `bridgeview=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Keep the WebView hidden behind the loading placeholder until the
    /// first page finishes loading.
    #[arg(long)]
    pub start_loading: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Layer command-line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut BridgeViewConfig) -> Result<(), BridgeViewError> {
        if let Some(url) = &self.url {
            config.webview.url = Some(url.clone());
            config.webview.html = None;
        }
        if let Some(path) = &self.html_file {
            config.webview.html = Some(std::fs::read_to_string(path)?);
            config.webview.url = None;
        }
        if self.start_loading {
            config.webview.start_in_loading_state = true;
        }
        Ok(())
    }
}
