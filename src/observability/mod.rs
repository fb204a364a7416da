//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry + driver produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Log fields carry the starter name, its position and the phase
//! - The library never installs a subscriber or recorder on its own

pub mod logging;
pub mod metrics;
