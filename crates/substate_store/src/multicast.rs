//! Multicast broadcaster with replay-of-one.
//!
//! A [`Multicast`] holds the latest emitted value and an ordered listener
//! list. New listeners are immediately replayed the current value exactly
//! once; every subsequent emission is delivered synchronously, in
//! registration order, inside the emitter's call stack.
//!
//! The listener list is snapshotted before delivery, so a listener may
//! cancel itself, cancel others, or subscribe re-entrantly without
//! invalidating the in-flight delivery.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct Listener<T> {
    id: u64,
    deliver: Rc<dyn Fn(&T)>,
}

struct Inner<T> {
    latest: RefCell<T>,
    listeners: RefCell<Vec<Listener<T>>>,
    next_id: Cell<u64>,
}

/// Single-threaded multicast subject with replay-of-one semantics.
///
/// Cloning the handle is O(1); all clones share the same latest value and
/// listener list.
pub struct Multicast<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Multicast<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Multicast<T> {
    /// Creates a multicast seeded with an initial value.
    ///
    /// The seed is what the first subscriber is replayed.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                latest: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Returns a clone of the latest value.
    #[must_use]
    pub fn latest(&self) -> T {
        self.inner.latest.borrow().clone()
    }

    /// Stores `value` as the latest and delivers it to every active
    /// listener, in registration order.
    ///
    /// Delivery is synchronous: a listener that emits re-entrantly recurses
    /// before this call returns.
    pub fn emit(&self, value: T) {
        *self.inner.latest.borrow_mut() = value.clone();
        // Snapshot so re-entrant subscribe/cancel cannot invalidate the walk.
        let snapshot: Vec<Rc<dyn Fn(&T)>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|l| Rc::clone(&l.deliver))
            .collect();
        for deliver in snapshot {
            deliver(&value);
        }
    }

    /// Registers a listener and immediately replays the current value to it
    /// exactly once.
    ///
    /// Returns a [`Subscription`] whose [`cancel`](Subscription::cancel)
    /// detaches the listener.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let deliver: Rc<dyn Fn(&T)> = Rc::new(listener);
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push(Listener {
            id,
            deliver: Rc::clone(&deliver),
        });

        let current = self.latest();
        deliver(&current);

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|l| l.id != id);
            }
        })
    }

    /// Returns the number of active listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Returns true if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.listeners.borrow().is_empty()
    }
}

/// A cancellation handle for one registered listener.
///
/// Cancelling is idempotent and immediate: after the first `cancel` call no
/// further deliveries reach the listener, and repeated calls do nothing.
/// Dropping a subscription does *not* cancel it; release is always explicit.
pub struct Subscription {
    detach: Box<dyn Fn()>,
    cancelled: Cell<bool>,
}

impl Subscription {
    fn new(detach: impl Fn() + 'static) -> Self {
        Self {
            detach: Box::new(detach),
            cancelled: Cell::new(false),
        }
    }

    /// Detaches the listener. Safe to call more than once.
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            (self.detach)();
        }
    }

    /// Returns true once [`cancel`](Subscription::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
