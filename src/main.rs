//! Starter runner.
//!
//! Loads configuration, registers the built-in starters followed by any
//! starters in the process-wide registry, and drives them through their
//! lifecycle.
//!
//! ```text
//! bootstrap                      driver (blocking worker)
//! ─────────                      ────────────────────────
//! parse CLI
//! load + validate config
//! init logging
//! build registry ──────────────▶ init → setup → start → start_blocking → stop
//! spawn signal listener            (parks here under `park` until SIGINT/SIGTERM)
//! await driver ◀──────────────── run complete
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use starter::config::validation::{normalize_log_level, validate_config};
use starter::config::{load_config, AppConfig, ConfigError};
use starter::lifecycle::signals::spawn_signal_listener;
use starter::observability::logging::init_logging;
use starter::starter::global;
use starter::{starters, BlockingPolicy, LifecycleDriver, Shutdown, StarterRegistry};

#[derive(Parser)]
#[command(name = "starter")]
#[command(about = "Drive registered starters through their lifecycle", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,

    /// Override `lifecycle.blocking` (ignore or park).
    #[arg(long)]
    blocking: Option<BlockingPolicy>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    if let Some(blocking) = cli.blocking {
        config.lifecycle.blocking = blocking;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    if let Some(level) = normalize_log_level(&config.observability.log_level) {
        config.observability.log_level = level.to_string();
    }

    init_logging(&config.observability.log_level)?;

    tracing::info!("starter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?cli.config,
        blocking = %config.lifecycle.blocking,
        "Configuration loaded"
    );

    let config = Arc::new(config);
    let mut registry = StarterRegistry::new();
    starters::register_builtin(&mut registry, &config);
    // self-registered starters run after the built-ins
    global::append_to(&mut registry);

    let shutdown = Shutdown::new();
    let _signals = spawn_signal_listener(shutdown.clone());

    let driver = LifecycleDriver::with_policy(config.lifecycle.blocking, &shutdown);
    tokio::task::spawn_blocking(move || driver.run(&registry)).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
