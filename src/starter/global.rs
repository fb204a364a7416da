//! Process-wide registration point.
//!
//! For components that register themselves during bootstrap without being
//! handed a [`StarterRegistry`]. Bootstrap code that owns its registry
//! should prefer passing it around explicitly.
//!
//! # Design Decisions
//! - One registry per process, created on first use, never torn down
//! - Guarded by a mutex, so concurrent registration is safe
//! - The lock is released before any starter runs: a starter may register
//!   more starters, which are not driven by the run already in progress

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::starter::contract::Starter;
use crate::starter::driver::LifecycleDriver;
use crate::starter::registry::StarterRegistry;

static GLOBAL: OnceLock<Mutex<StarterRegistry>> = OnceLock::new();

fn global() -> MutexGuard<'static, StarterRegistry> {
    GLOBAL
        .get_or_init(Default::default)
        .lock()
        // a panic mid-push cannot leave the Vec half-written
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Append a starter to the process-wide registry.
pub fn register<S: Starter + 'static>(starter: S) {
    global().register(starter);
}

/// Append an already shared starter to the process-wide registry.
pub fn register_shared(starter: Arc<dyn Starter>) {
    global().register_shared(starter);
}

/// Starters registered so far, in registration order.
pub fn snapshot() -> Vec<Arc<dyn Starter>> {
    global().all_starters()
}

/// Append the starters registered so far to `registry`, in order.
///
/// Lets a bootstrap that owns an explicit registry also drive components
/// that registered themselves here.
pub fn append_to(registry: &mut StarterRegistry) {
    for starter in snapshot() {
        registry.register_shared(starter);
    }
}

/// Drive every globally registered starter, ignoring blocking intent.
pub fn system_run() {
    run_with(&LifecycleDriver::new());
}

/// Drive every globally registered starter with a caller-supplied driver.
pub fn run_with(driver: &LifecycleDriver) {
    let starters = snapshot();
    driver.run_starters(&starters);
}
