//! The shared state store: single owner of the current state value.
//!
//! All mutation funnels through [`Store::update`]; there is no direct
//! setter. The stored value is never mutated in place — every update
//! installs a structurally new value (built elsewhere with the path
//! engine), so readers can never observe a half-written state.

use substate_foundation::Value;

use crate::multicast::{Multicast, Subscription};

/// The single owner of the current state value plus its change broadcaster.
///
/// Cloning the handle is O(1); all clones share the same state value and
/// subscriber list. The store is agnostic to how an update's `next` value
/// was derived.
#[derive(Clone)]
pub struct Store {
    changes: Multicast<Value>,
}

impl Store {
    /// Creates a store owning `initial` as its current state.
    #[must_use]
    pub fn new(initial: Value) -> Self {
        Self {
            changes: Multicast::new(initial),
        }
    }

    /// Returns a snapshot of the current state (O(1) clone).
    #[must_use]
    pub fn get(&self) -> Value {
        self.changes.latest()
    }

    /// Replaces the state with `transform(current)` and synchronously
    /// notifies every active subscriber with the new value, in
    /// subscription order.
    ///
    /// This is the sole mutation entry point. A subscriber that calls
    /// `update` from inside its listener recurses before the outer call
    /// returns; termination of such re-entrant chains is the caller's
    /// responsibility.
    pub fn update(&self, transform: impl FnOnce(&Value) -> Value) {
        let next = transform(&self.get());
        self.changes.emit(next);
    }

    /// Registers a listener, immediately replaying the current state to it
    /// exactly once, then delivering every subsequent update until the
    /// returned subscription is cancelled.
    pub fn subscribe(&self, listener: impl Fn(&Value) + 'static) -> Subscription {
        self.changes.subscribe(listener)
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.changes.len()
    }
}

impl Default for Store {
    /// An empty-map state, the conventional starting point.
    fn default() -> Self {
        Self::new(Value::empty_map())
    }
}
