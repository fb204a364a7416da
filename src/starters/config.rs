//! Starter that publishes the loaded configuration to the context.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::starter::{ContextKey, Starter, StarterContext};

/// Context entry holding the process configuration.
pub const CONFIG: ContextKey<Arc<AppConfig>> = ContextKey::new("config");

/// Makes the [`AppConfig`] available to every starter registered after it.
///
/// The entry stays in the context after `stop`, since later starters run
/// their whole lifecycle after this one finishes.
#[derive(Debug, Clone)]
pub struct ConfigStarter {
    config: Arc<AppConfig>,
    blocking: bool,
}

impl ConfigStarter {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let blocking = config.starters.config.blocking;
        Self { config, blocking }
    }
}

impl Starter for ConfigStarter {
    fn init(&self, ctx: &mut StarterContext) {
        ctx.put(&CONFIG, self.config.clone());
        tracing::info!(key = CONFIG.name(), "Config init");
    }

    fn setup(&self, _ctx: &mut StarterContext) {
        tracing::info!(
            blocking_policy = %self.config.lifecycle.blocking,
            log_level = %self.config.observability.log_level,
            "Config setup"
        );
    }

    fn start(&self, _ctx: &mut StarterContext) {
        tracing::info!("Config start");
    }

    fn start_blocking(&self) -> bool {
        tracing::info!(blocking = self.blocking, "Config start_blocking");
        self.blocking
    }

    fn stop(&self, _ctx: &mut StarterContext) {
        tracing::info!("Config stop");
    }

    fn name(&self) -> &str {
        "config"
    }
}
