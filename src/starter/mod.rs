//! Starter registration and the lifecycle driver.
//!
//! # Data Flow
//! ```text
//! bootstrap:
//!     StarterRegistry::register (or global::register)
//!         → ordered Vec<Arc<dyn Starter>>
//!
//! run:
//!     LifecycleDriver::run
//!         → fresh StarterContext
//!         → per starter: init → setup → start → start_blocking → stop
//! ```
//!
//! # Design Decisions
//! - Registration order is execution order; no dependency resolution
//! - Starters talk to each other only through the shared context
//! - The contract has no error channel; starters own their failures

pub mod context;
pub mod contract;
pub mod driver;
pub mod global;
pub mod phase;
pub mod registry;

pub use context::{ContextKey, StarterContext};
pub use contract::{BaseStarter, Starter};
pub use driver::LifecycleDriver;
pub use phase::{BlockingPolicy, ParsePolicyError, Phase};
pub use registry::StarterRegistry;
