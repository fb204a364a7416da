//! The lifecycle driver.
//!
//! # Algorithm
//! ```text
//! ctx = empty context
//! for starter in registry (registration order):
//!     init(ctx) → setup(ctx) → start(ctx) → start_blocking() → stop(ctx)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: a starter's phases all finish before the next
//!   starter's `init`
//! - One context for the whole run, never reset
//! - No failure handling: phases cannot report errors and panics unwind
//!   through the driver untouched
//! - Blocking intent is ignored unless the driver was built with a shutdown
//!   handle to park on

use std::sync::Arc;
use std::time::Instant;

use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::starter::context::StarterContext;
use crate::starter::contract::Starter;
use crate::starter::phase::{BlockingPolicy, Phase};
use crate::starter::registry::StarterRegistry;

/// Drives registered starters through their lifecycle.
#[derive(Debug, Clone, Default)]
pub struct LifecycleDriver {
    /// Present only under [`BlockingPolicy::Park`].
    shutdown: Option<Shutdown>,
}

impl LifecycleDriver {
    /// A driver that ignores blocking intent: `stop` always follows
    /// `start_blocking` immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver that parks after any starter reporting blocking intent until
    /// `shutdown` is triggered.
    pub fn parking(shutdown: Shutdown) -> Self {
        Self {
            shutdown: Some(shutdown),
        }
    }

    /// Build a driver for `policy`. The shutdown handle is only kept when
    /// parking.
    pub fn with_policy(policy: BlockingPolicy, shutdown: &Shutdown) -> Self {
        match policy {
            BlockingPolicy::Ignore => Self::new(),
            BlockingPolicy::Park => Self::parking(shutdown.clone()),
        }
    }

    pub fn policy(&self) -> BlockingPolicy {
        if self.shutdown.is_some() {
            BlockingPolicy::Park
        } else {
            BlockingPolicy::Ignore
        }
    }

    /// Run every starter in `registry`.
    ///
    /// Returns once the last starter's `stop` has returned. Under
    /// [`BlockingPolicy::Park`] this blocks the calling thread, so call it
    /// from a plain thread or `spawn_blocking`, never from async code.
    pub fn run(&self, registry: &StarterRegistry) {
        self.run_starters(&registry.all_starters());
    }

    /// Run the given starters in slice order with one fresh context.
    pub fn run_starters(&self, starters: &[Arc<dyn Starter>]) {
        let mut ctx = StarterContext::new();
        let started = Instant::now();

        tracing::info!(
            starters = starters.len(),
            policy = %self.policy(),
            "Lifecycle run starting"
        );
        metrics::record_run(starters.len());

        for (index, starter) in starters.iter().enumerate() {
            self.drive(index, starter.as_ref(), &mut ctx);
        }

        tracing::info!(
            starters = starters.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Lifecycle run complete"
        );
    }

    fn drive(&self, index: usize, starter: &dyn Starter, ctx: &mut StarterContext) {
        let name = starter.name();

        observe(Phase::Init, index, name, || starter.init(ctx));
        observe(Phase::Setup, index, name, || starter.setup(ctx));
        observe(Phase::Start, index, name, || starter.start(ctx));
        let blocking = observe(Phase::StartBlocking, index, name, || starter.start_blocking());

        if blocking {
            self.hold(index, name);
        }

        observe(Phase::Stop, index, name, || starter.stop(ctx));
    }

    fn hold(&self, index: usize, name: &str) {
        match &self.shutdown {
            Some(shutdown) => {
                tracing::info!(starter = name, index, "Starter is blocking, parked until shutdown");
                shutdown.wait_blocking();
                tracing::info!(starter = name, index, "Shutdown received, resuming");
            }
            None => {
                tracing::debug!(starter = name, index, "Blocking intent ignored");
            }
        }
    }
}

fn observe<R>(phase: Phase, index: usize, name: &str, f: impl FnOnce() -> R) -> R {
    let started = Instant::now();
    let result = f();
    let elapsed = started.elapsed();

    tracing::debug!(
        starter = name,
        index,
        phase = %phase,
        elapsed_us = elapsed.as_micros() as u64,
        "Phase complete"
    );
    metrics::record_phase(phase, elapsed);

    result
}
