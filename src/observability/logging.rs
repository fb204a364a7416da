//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Pick the level from `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over config so operators can raise verbosity ad hoc
//! - The configured level is a bare level name, normalized by the same rule
//!   config validation applies

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::validation::normalize_log_level;

const FALLBACK_LEVEL: &str = "info";

/// Build the filter used by [`init_logging`].
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level))
}

/// Filter scoping `level` to this crate, ignoring `RUST_LOG`.
///
/// An unrecognised level falls back to `info`; validated configs never hit
/// that path.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(default_directive(level))
}

fn default_directive(level: &str) -> String {
    let level = normalize_log_level(level).unwrap_or(FALLBACK_LEVEL);
    format!("starter={}", level)
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
