//! Shared starters for integration tests.

use std::sync::{Arc, Mutex};

use starter::{Phase, Starter, StarterContext};

/// Ordered log of `(starter name, phase)` events shared between recorders.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<(String, Phase)>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, name: &str, phase: Phase) {
        self.0.lock().unwrap().push((name.to_string(), phase));
    }

    pub fn events(&self) -> Vec<(String, Phase)> {
        self.0.lock().unwrap().clone()
    }

    /// Expected events for `names` each running a full lifecycle in turn.
    pub fn full_passes(names: &[&str]) -> Vec<(String, Phase)> {
        names
            .iter()
            .flat_map(|name| Phase::ALL.iter().map(move |phase| (name.to_string(), *phase)))
            .collect()
    }
}

/// A starter that records every call and the address of the context it
/// was handed.
pub struct Recorder {
    name: &'static str,
    blocking: bool,
    log: EventLog,
    contexts: Arc<Mutex<Vec<usize>>>,
}

impl Recorder {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            blocking: false,
            log: log.clone(),
            contexts: Arc::default(),
        }
    }

    #[allow(dead_code)]
    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    /// Context addresses seen so far, one per context-taking phase.
    #[allow(dead_code)]
    pub fn contexts(&self) -> Arc<Mutex<Vec<usize>>> {
        self.contexts.clone()
    }

    fn record(&self, phase: Phase, ctx: &StarterContext) {
        self.contexts
            .lock()
            .unwrap()
            .push(ctx as *const StarterContext as usize);
        self.log.push(self.name, phase);
    }
}

impl Starter for Recorder {
    fn init(&self, ctx: &mut StarterContext) {
        self.record(Phase::Init, ctx);
    }

    fn setup(&self, ctx: &mut StarterContext) {
        self.record(Phase::Setup, ctx);
    }

    fn start(&self, ctx: &mut StarterContext) {
        self.record(Phase::Start, ctx);
    }

    fn start_blocking(&self) -> bool {
        self.log.push(self.name, Phase::StartBlocking);
        self.blocking
    }

    fn stop(&self, ctx: &mut StarterContext) {
        self.record(Phase::Stop, ctx);
    }

    fn name(&self) -> &str {
        self.name
    }
}
