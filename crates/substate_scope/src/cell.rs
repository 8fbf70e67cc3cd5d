//! Consumer-local state mirror and memoized derivations.
//!
//! Each consumer holds a [`StateCell`]: its own copy of the latest root
//! state, written only by that consumer's store subscription. Accessors
//! derive from the cell through [`Computed`], which recomputes exactly when
//! the cell's revision changes and serves a cached clone between changes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use substate_foundation::Value;

struct CellInner {
    value: RefCell<Value>,
    revision: Cell<u64>,
}

/// A consumer's locally held "current state" reference.
///
/// Cloning the handle is O(1); all clones see the same value and revision.
/// Only the owning consumer's subscription listener writes into it.
#[derive(Clone)]
pub struct StateCell {
    inner: Rc<CellInner>,
}

impl StateCell {
    /// Creates a cell seeded with `initial`.
    #[must_use]
    pub fn new(initial: Value) -> Self {
        Self {
            inner: Rc::new(CellInner {
                value: RefCell::new(initial),
                revision: Cell::new(0),
            }),
        }
    }

    /// Returns a snapshot of the held value (O(1) clone).
    #[must_use]
    pub fn get(&self) -> Value {
        self.inner.value.borrow().clone()
    }

    /// Installs a new value and advances the revision, invalidating every
    /// derivation memoized against this cell.
    pub fn set(&self, value: Value) {
        *self.inner.value.borrow_mut() = value;
        self.inner.revision.set(self.inner.revision.get() + 1);
    }

    /// Returns the current revision stamp.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }
}

/// A memoized derivation over a [`StateCell`].
///
/// `get` recomputes only when the cell's revision has advanced since the
/// last read; otherwise it returns a clone of the cached result. Reading
/// never writes anything. Clones of a `Computed` share one cache.
pub struct Computed<T> {
    source: StateCell,
    derive: Rc<dyn Fn(&Value) -> T>,
    cache: Rc<RefCell<Option<(u64, T)>>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            derive: Rc::clone(&self.derive),
            cache: Rc::clone(&self.cache),
        }
    }
}

impl<T: Clone> Computed<T> {
    pub(crate) fn new(source: StateCell, derive: impl Fn(&Value) -> T + 'static) -> Self {
        Self {
            source,
            derive: Rc::new(derive),
            cache: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns the derived value, recomputing it only if the upstream cell
    /// changed since the last read.
    #[must_use]
    pub fn get(&self) -> T {
        let revision = self.source.revision();
        if let Some((cached_revision, cached)) = &*self.cache.borrow() {
            if *cached_revision == revision {
                return cached.clone();
            }
        }
        let snapshot = self.source.get();
        let result = (self.derive)(&snapshot);
        *self.cache.borrow_mut() = Some((revision, result.clone()));
        result
    }
}
