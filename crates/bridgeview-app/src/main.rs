mod app;
mod cli;

use bridgeview_config::{load_config, toml_loader, validation, BridgeViewConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "bridgeview=info";

fn init_logging(directive: &str) {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().expect("valid default directive"));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    let args = cli::parse();

    // Only the log level is read ahead of the subscriber; the real load
    // below logs through it.
    let directive = args.log_level.clone().unwrap_or_else(|| {
        toml_loader::peek_logging(args.config.as_deref())
            .map(|logging| logging.directive())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string())
    });
    init_logging(&directive);

    tracing::info!("bridgeview v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            BridgeViewConfig::default()
        }
    };

    if let Err(e) = args.apply_to(&mut config) {
        tracing::error!("Invalid command line: {e}");
        std::process::exit(2);
    }

    if let Err(e) = validation::validate(&config) {
        tracing::error!("{e}");
        std::process::exit(2);
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app::BridgeApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
