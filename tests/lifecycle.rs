//! End-to-end lifecycle runs through the registry and driver.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use starter::config::AppConfig;
use starter::starters::{self, CONFIG};
use starter::{
    BaseStarter, BlockingPolicy, LifecycleDriver, Phase, Shutdown, Starter, StarterContext,
    StarterRegistry,
};

mod common;

use common::{EventLog, Recorder};

#[test]
fn test_starters_run_in_registration_order() {
    let log = EventLog::new();
    let mut registry = StarterRegistry::new();
    registry.register(Recorder::new("a", &log));
    registry.register(Recorder::new("b", &log));
    registry.register(Recorder::new("c", &log));

    LifecycleDriver::new().run(&registry);

    assert_eq!(log.events(), EventLog::full_passes(&["a", "b", "c"]));
}

#[test]
fn test_empty_registry_completes() {
    let registry = StarterRegistry::new();
    LifecycleDriver::new().run(&registry);
    assert!(registry.is_empty());
}

#[test]
fn test_context_is_shared_across_starters() {
    let log = EventLog::new();
    let first = Recorder::new("first", &log);
    let second = Recorder::new("second", &log);
    let seen_first = first.contexts();
    let seen_second = second.contexts();

    let mut registry = StarterRegistry::new();
    registry.register(first);
    registry.register(BaseStarter);
    registry.register(second);
    LifecycleDriver::new().run(&registry);

    let mut all = seen_first.lock().unwrap().clone();
    all.extend(seen_second.lock().unwrap().iter().copied());

    // init, setup, start, stop for each recorder
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|addr| *addr == all[0]));
}

#[test]
fn test_ignored_blocking_intent_still_stops() {
    let log = EventLog::new();
    let mut registry = StarterRegistry::new();
    registry.register(Recorder::new("server", &log).blocking());
    registry.register(Recorder::new("after", &log));

    LifecycleDriver::new().run(&registry);

    assert_eq!(log.events(), EventLog::full_passes(&["server", "after"]));
}

#[test]
fn test_same_instance_registered_twice_runs_twice() {
    let log = EventLog::new();
    let twice: Arc<dyn Starter> = Arc::new(Recorder::new("twice", &log));

    let mut registry = StarterRegistry::new();
    registry.register_shared(twice.clone());
    registry.register(Recorder::new("between", &log));
    registry.register_shared(twice);

    LifecycleDriver::new().run(&registry);

    assert_eq!(
        log.events(),
        EventLog::full_passes(&["twice", "between", "twice"])
    );
}

struct OpensDb;

impl Starter for OpensDb {
    fn init(&self, ctx: &mut StarterContext) {
        ctx.insert("db", String::from("handle-1"));
    }
}

struct ReadsDb {
    seen: Arc<Mutex<Option<String>>>,
}

impl Starter for ReadsDb {
    fn setup(&self, ctx: &mut StarterContext) {
        *self.seen.lock().unwrap() = ctx.get::<String>("db").cloned();
    }
}

#[test]
fn test_later_starter_reads_earlier_init() {
    let seen = Arc::new(Mutex::new(None));

    let mut registry = StarterRegistry::new();
    registry.register(OpensDb);
    registry.register(ReadsDb { seen: seen.clone() });
    LifecycleDriver::new().run(&registry);

    assert_eq!(seen.lock().unwrap().as_deref(), Some("handle-1"));
}

#[test]
fn test_each_run_gets_fresh_context() {
    struct CountsRuns {
        seen: Arc<Mutex<Vec<bool>>>,
    }

    impl Starter for CountsRuns {
        fn init(&self, ctx: &mut StarterContext) {
            self.seen.lock().unwrap().push(ctx.contains_key("ran"));
            ctx.insert("ran", ());
        }
    }

    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut registry = StarterRegistry::new();
    registry.register(CountsRuns { seen: seen.clone() });

    let driver = LifecycleDriver::new();
    driver.run(&registry);
    driver.run(&registry);

    assert_eq!(*seen.lock().unwrap(), [false, false]);
}

#[test]
fn test_builtin_config_visible_to_later_starters() {
    struct ReadsConfig {
        level: Arc<Mutex<Option<String>>>,
    }

    impl Starter for ReadsConfig {
        fn setup(&self, ctx: &mut StarterContext) {
            *self.level.lock().unwrap() = ctx
                .fetch(&CONFIG)
                .map(|config| config.observability.log_level.clone());
        }
    }

    let mut config = AppConfig::default();
    config.observability.log_level = "warn".into();
    let config = Arc::new(config);

    let level = Arc::new(Mutex::new(None));
    let mut registry = StarterRegistry::new();
    starters::register_builtin(&mut registry, &config);
    registry.register(ReadsConfig {
        level: level.clone(),
    });

    // ConfigStarter reports blocking by default; the default driver ignores it
    LifecycleDriver::new().run(&registry);

    assert_eq!(level.lock().unwrap().as_deref(), Some("warn"));
}

async fn wait_for(log: &EventLog, event: (&str, Phase)) {
    let wanted = (event.0.to_string(), event.1);
    for _ in 0..200 {
        if log.events().contains(&wanted) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("never observed {:?}", wanted);
}

#[tokio::test]
async fn test_park_holds_stop_until_shutdown() {
    let log = EventLog::new();
    let mut registry = StarterRegistry::new();
    registry.register(Recorder::new("server", &log).blocking());
    registry.register(Recorder::new("after", &log));

    let shutdown = Shutdown::new();
    let driver = LifecycleDriver::with_policy(BlockingPolicy::Park, &shutdown);
    let run = tokio::task::spawn_blocking(move || driver.run(&registry));

    wait_for(&log, ("server", Phase::StartBlocking)).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    // parked: no stop yet, next starter untouched
    assert_eq!(log.events(), &EventLog::full_passes(&["server"])[..4]);
    assert!(!run.is_finished());

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(2), run)
        .await
        .expect("driver should resume after shutdown")
        .unwrap();

    assert_eq!(log.events(), EventLog::full_passes(&["server", "after"]));
}

#[tokio::test]
async fn test_park_skips_non_blocking_starters() {
    let log = EventLog::new();
    let mut registry = StarterRegistry::new();
    registry.register(Recorder::new("worker", &log));

    let shutdown = Shutdown::new();
    let driver = LifecycleDriver::parking(shutdown.clone());
    let run = tokio::task::spawn_blocking(move || driver.run(&registry));

    tokio::time::timeout(Duration::from_secs(2), run)
        .await
        .expect("non-blocking starters must not park")
        .unwrap();

    assert!(!shutdown.is_triggered());
    assert_eq!(log.events(), EventLog::full_passes(&["worker"]));
}
