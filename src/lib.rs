//! Component lifecycle orchestration.
//!
//! Components implement [`Starter`] and are registered, in order, into a
//! [`StarterRegistry`] during bootstrap. A [`LifecycleDriver`] then walks each
//! one through `init → setup → start → start_blocking → stop`, sharing a
//! single [`StarterContext`] between all of them.
//!
//! ```
//! use starter::{LifecycleDriver, Starter, StarterContext, StarterRegistry};
//!
//! struct Database;
//!
//! impl Starter for Database {
//!     fn init(&self, ctx: &mut StarterContext) {
//!         ctx.insert("db", String::from("postgres://localhost/app"));
//!     }
//! }
//!
//! struct Migrations;
//!
//! impl Starter for Migrations {
//!     fn setup(&self, ctx: &mut StarterContext) {
//!         assert!(ctx.get::<String>("db").is_some());
//!     }
//! }
//!
//! let mut registry = StarterRegistry::new();
//! registry.register(Database);
//! registry.register(Migrations);
//! LifecycleDriver::new().run(&registry);
//! ```

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod starter;
pub mod starters;

pub use config::AppConfig;
pub use lifecycle::Shutdown;
pub use starter::{
    BaseStarter, BlockingPolicy, ContextKey, LifecycleDriver, Phase, Starter, StarterContext,
    StarterRegistry,
};
