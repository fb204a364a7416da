//! Ordered collection of registered starters.

use std::fmt;
use std::sync::Arc;

use crate::starter::contract::Starter;

/// Append-only list of starters. Registration order is execution order.
///
/// No deduplication: registering the same instance twice (see
/// [`StarterRegistry::register_shared`]) runs it twice.
#[derive(Default, Clone)]
pub struct StarterRegistry {
    starters: Vec<Arc<dyn Starter>>,
}

impl StarterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a starter.
    pub fn register<S: Starter + 'static>(&mut self, starter: S) {
        self.register_shared(Arc::new(starter));
    }

    /// Append an already shared starter.
    pub fn register_shared(&mut self, starter: Arc<dyn Starter>) {
        tracing::debug!(
            starter = starter.name(),
            position = self.starters.len(),
            "Starter registered"
        );
        self.starters.push(starter);
    }

    /// Snapshot of every registered starter, in registration order.
    ///
    /// Later registrations do not show up in a snapshot already taken.
    pub fn all_starters(&self) -> Vec<Arc<dyn Starter>> {
        self.starters.clone()
    }

    pub fn len(&self) -> usize {
        self.starters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}

impl fmt::Debug for StarterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.starters.iter().map(|s| s.name()))
            .finish()
    }
}
