//! URL query-parameter state abstract Trait
//!
//! The editor keeps its selection synchronized with a `name` query parameter.
//! Frontends adapt whatever carries that state for them (browser history,
//! a TUI route stack, a desktop window) behind `UrlState`, and external
//! navigation is delivered through an explicit observer subscription rather
//! than implicit reactive re-derivation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, Weak};

use crate::utils::query::parse_query;

/// Query parameters: key -> value
pub type UrlParams = HashMap<String, String>;

/// Observer of URL parameter changes
///
/// `url_changed` is invoked synchronously on every change event with the
/// full parameter map; implementations recompute derived state in place.
pub trait UrlObserver: Send + Sync {
    fn url_changed(&self, params: &UrlParams);
}

/// URL State Trait
///
/// All operations are synchronous: state transitions happen on an
/// event-driven UI loop and never suspend.
pub trait UrlState: Send + Sync {
    /// Current value of a parameter
    fn get(&self, key: &str) -> Option<String>;

    /// Set a parameter
    fn set(&self, key: &str, value: &str);

    /// Remove a parameter
    fn remove(&self, key: &str);

    /// Snapshot of all parameters
    fn params(&self) -> UrlParams;

    /// Subscribe to change events
    ///
    /// Observers are held weakly: an observer dropped by its frontend is
    /// pruned on the next notification instead of leaking.
    fn subscribe(&self, observer: Weak<dyn UrlObserver>);
}

/// In-memory URL state
///
/// Default implementation, used by tests and by frontends without a real
/// address bar. Observers are notified after the parameter lock is released,
/// so re-entrant reads from an observer cannot deadlock, and only when the
/// map actually changed.
pub struct InMemoryUrlState {
    params: RwLock<UrlParams>,
    observers: RwLock<Vec<Weak<dyn UrlObserver>>>,
}

impl InMemoryUrlState {
    /// Create an empty URL state
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: RwLock::new(UrlParams::new()),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Create a URL state from an initial query string (e.g. `"?name=a.com"`)
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            params: RwLock::new(parse_query(query)),
            observers: RwLock::new(Vec::new()),
        }
    }

    fn notify(&self) {
        let params = self.params();
        let observers: Vec<_> = {
            let mut guard = self
                .observers
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            guard.retain(|observer| observer.strong_count() > 0);
            guard.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in observers {
            observer.url_changed(&params);
        }
    }
}

impl Default for InMemoryUrlState {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlState for InMemoryUrlState {
    fn get(&self, key: &str) -> Option<String> {
        self.params
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let changed = {
            let mut params = self.params.write().unwrap_or_else(PoisonError::into_inner);
            params.insert(key.to_string(), value.to_string()) != Some(value.to_string())
        };
        if changed {
            self.notify();
        }
    }

    fn remove(&self, key: &str) {
        let changed = {
            let mut params = self.params.write().unwrap_or_else(PoisonError::into_inner);
            params.remove(key).is_some()
        };
        if changed {
            self.notify();
        }
    }

    fn params(&self) -> UrlParams {
        self.params
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn subscribe(&self, observer: Weak<dyn UrlObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }
}
