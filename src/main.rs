//! disha-view - terminal orientation visualizer
//!
//! Dials the sensor daemon (retrying until it shows up), then runs the
//! render loop: one bounded stream poll and one cube redraw per frame.

use disha_view::app::App;
use disha_view::config::AppConfig;
use disha_view::error::{Error, Result};
use disha_view::transport::TcpTransport;
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `disha-view <path>` (positional)
/// - `disha-view --config <path>` (flag-based)
/// - `disha-view -c <path>` (short flag)
///
/// Defaults to `disha-view.toml` in the working directory.
fn parse_config_path() -> String {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return args[1].clone();
    }

    "disha-view.toml".to_string()
}

fn main() -> Result<()> {
    let config_path = parse_config_path();
    let config_found = Path::new(&config_path).exists();
    let config = if config_found {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("disha-view v{} starting...", env!("CARGO_PKG_VERSION"));
    if config_found {
        log::info!("Using config: {}", config_path);
    } else {
        log::info!("Config {} not found, using built-in defaults", config_path);
    }

    // Shutdown signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    // The initial dial may block indefinitely before any UI is shown;
    // the daemon is expected to come and go while this client waits.
    let mut transport = match TcpTransport::connect(&config.connection, &running) {
        Ok(t) => t,
        Err(Error::Cancelled) => {
            log::info!("Shutdown before a connection was established");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let app = App::new(config, Arc::clone(&running));
    app.run(&mut transport)?;

    log::info!("disha-view stopped");
    Ok(())
}
