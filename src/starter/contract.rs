//! The lifecycle contract every starter implements.

use crate::starter::context::StarterContext;

/// A pluggable component driven through the managed lifecycle.
///
/// The driver calls, in order and exactly once per registration:
///
/// ```text
/// init → setup → start → start_blocking → stop
/// ```
///
/// Every member has a no-op default, so implementors override only the
/// phases they care about. Phases have no error channel: a starter that hits
/// an unrecoverable condition must deal with it itself (log and carry on, or
/// abort the process).
pub trait Starter: Send + Sync {
    /// Acquire foundational resources (open a database handle, connect to a
    /// broker).
    fn init(&self, _ctx: &mut StarterContext) {}

    /// One-time installation that depends on what `init` acquired (create
    /// tables, declare queues).
    fn setup(&self, _ctx: &mut StarterContext) {}

    /// Put resources into live use (start consumers, open pools).
    fn start(&self, _ctx: &mut StarterContext) {}

    /// Whether this starter wants to hold the process open once started,
    /// e.g. because it serves requests.
    fn start_blocking(&self) -> bool {
        false
    }

    /// Release whatever earlier phases acquired.
    fn stop(&self, _ctx: &mut StarterContext) {}

    /// Label used in logs and metrics. Not an identity: the registry
    /// identifies starters by position only.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A starter that does nothing in any phase.
///
/// Useful as a placeholder registration or as a field a composite starter
/// delegates its unused phases to.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStarter;

impl Starter for BaseStarter {}
