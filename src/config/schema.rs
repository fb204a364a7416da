//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::starter::BlockingPolicy;

/// Root configuration for the starter runner.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Driver behaviour.
    pub lifecycle: LifecycleConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Settings for the built-in starters.
    pub starters: StartersConfig,
}

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LifecycleConfig {
    /// What to do when a starter reports blocking intent.
    pub blocking: BlockingPolicy,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Built-in starter configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct StartersConfig {
    pub config: ConfigStarterConfig,
}

/// Settings for [`crate::starters::ConfigStarter`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConfigStarterConfig {
    /// Register the starter at all.
    pub enabled: bool,

    /// Value reported by its `start_blocking`.
    pub blocking: bool,
}

impl Default for ConfigStarterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blocking: true,
        }
    }
}
