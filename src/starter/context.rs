//! Shared key-value context handed to every lifecycle phase.
//!
//! # Responsibilities
//! - Carry values from one starter to the next within a single run
//! - Accept any `Send` value under any string key
//! - Offer typed accessors for keys whose value type is known up front
//!
//! # Design Decisions
//! - Keys are not namespaced: two starters writing the same key overwrite
//!   each other, last write wins
//! - Lookups with the wrong type return `None` instead of panicking
//! - One context per run; the driver never clears it between starters

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Mutable string-keyed map shared by every starter during one run.
#[derive(Default)]
pub struct StarterContext {
    values: HashMap<String, Box<dyn Any + Send>>,
}

impl StarterContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning whatever was there before.
    pub fn insert<T: Any + Send>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Option<Box<dyn Any + Send>> {
        self.values.insert(key.into(), Box::new(value))
    }

    /// Borrow the value under `key` if it exists and is a `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Mutably borrow the value under `key` if it exists and is a `T`.
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.values.get_mut(key).and_then(|v| v.downcast_mut::<T>())
    }

    /// Remove and return the value under `key` if it is a `T`.
    ///
    /// An entry holding some other type is left untouched.
    pub fn remove<T: Any>(&mut self, key: &str) -> Option<T> {
        if !self.values.get(key).is_some_and(|v| v.is::<T>()) {
            return None;
        }
        self.values
            .remove(key)
            .and_then(|v| v.downcast::<T>().ok())
            .map(|v| *v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys currently present, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Store a value under a typed key.
    pub fn put<T: Any + Send>(&mut self, key: &ContextKey<T>, value: T) {
        self.values.insert(key.name.to_string(), Box::new(value));
    }

    /// Borrow the value under a typed key.
    pub fn fetch<T: Any>(&self, key: &ContextKey<T>) -> Option<&T> {
        self.get(key.name)
    }

    /// Mutably borrow the value under a typed key.
    pub fn fetch_mut<T: Any>(&mut self, key: &ContextKey<T>) -> Option<&mut T> {
        self.get_mut(key.name)
    }

    /// Remove the value under a typed key.
    pub fn take<T: Any>(&mut self, key: &ContextKey<T>) -> Option<T> {
        self.remove(key.name)
    }
}

impl fmt::Debug for StarterContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("StarterContext").field("keys", &keys).finish()
    }
}

/// A context key bound to the type stored under it.
///
/// Declare one per well-known entry so producers and consumers agree on the
/// value type:
///
/// ```
/// use starter::ContextKey;
///
/// pub const DB_URL: ContextKey<String> = ContextKey::new("db.url");
/// ```
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextKey").field(&self.name).finish()
    }
}
