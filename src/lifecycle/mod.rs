//! Process lifecycle plumbing around the starter driver.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → latched flag + broadcast → parked driver resumes
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - The driver itself never installs signal handlers; the binary wires
//!   signals to a `Shutdown` it hands to the driver
//! - No shutdown deadline: starters' `stop` phases run to completion

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
