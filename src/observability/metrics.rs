//! Lifecycle metrics.
//!
//! # Metrics
//! - `starter_runs_total` (counter): lifecycle runs started
//! - `starter_registered` (gauge): starters in the most recent run
//! - `starter_phase_total` (counter): phases executed, by phase
//! - `starter_phase_duration_seconds` (histogram): phase latency, by phase
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade only; the embedding process
//!   decides whether a recorder/exporter is installed
//! - Labelled by phase, not by starter, to keep cardinality fixed

use std::time::Duration;

use crate::starter::Phase;

/// Record the start of a lifecycle run over `starters` starters.
pub fn record_run(starters: usize) {
    metrics::counter!("starter_runs_total").increment(1);
    metrics::gauge!("starter_registered").set(starters as f64);
}

/// Record one completed phase.
pub fn record_phase(phase: Phase, elapsed: Duration) {
    metrics::counter!("starter_phase_total", "phase" => phase.as_str()).increment(1);
    metrics::histogram!("starter_phase_duration_seconds", "phase" => phase.as_str())
        .record(elapsed.as_secs_f64());
}
