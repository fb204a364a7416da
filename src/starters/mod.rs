//! Built-in starters shipped with the runner.

pub mod config;

pub use config::{ConfigStarter, CONFIG};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::starter::StarterRegistry;

/// Register every built-in starter enabled in `config`, in their fixed order.
pub fn register_builtin(registry: &mut StarterRegistry, config: &Arc<AppConfig>) {
    if config.starters.config.enabled {
        registry.register(ConfigStarter::new(config.clone()));
    }
}
