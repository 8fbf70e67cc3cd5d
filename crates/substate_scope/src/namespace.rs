//! Namespace composition: path-scoped accessor bundles over shared state.
//!
//! A [`Namespace`] is a view, not a copy: it holds a consumer's
//! [`StateCell`], an accumulated root-relative path prefix, and the shared
//! write-back function. Reading re-derives the slice from the current root
//! along the prefix; writing folds the new slice value back into the root
//! through exactly one store update.
//!
//! Nesting composes paths, never closures: every child namespace shares the
//! *same* write-back handle, so a write's cost is independent of how deeply
//! namespaces are nested.

use std::rc::Rc;

use substate_foundation::{Path, Value, get_or};

use crate::cell::{Computed, StateCell};

/// The root write-back function: installs `value` at a root-relative path
/// with a single store update.
pub(crate) type WriteBack = Rc<dyn Fn(&Path, Value)>;

/// A path-scoped bundle of accessors over one consumer's state view.
///
/// Namespaces own no state and need no cleanup; they are plain values
/// dropped when the last accessor holding them goes away.
#[derive(Clone)]
pub struct Namespace {
    cell: StateCell,
    prefix: Path,
    write_back: WriteBack,
}

impl Namespace {
    pub(crate) fn new(cell: StateCell, prefix: Path, write_back: WriteBack) -> Self {
        Self {
            cell,
            prefix,
            write_back,
        }
    }

    /// The root-relative path this namespace is scoped to.
    #[must_use]
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// A memoized read-only view of this namespace's slice.
    ///
    /// Resolves to an empty map while the slice is unreachable. Recomputed
    /// whenever the consumer's state changes; one path walk per
    /// recomputation regardless of nesting depth.
    #[must_use]
    pub fn state(&self) -> Computed<Value> {
        let prefix = self.prefix.clone();
        Computed::new(self.cell.clone(), move |root| {
            get_or(root, &prefix, &Value::empty_map())
        })
    }

    /// A memoized derivation of `derive(slice)`.
    ///
    /// `derive` receives the namespace's current slice by shared reference
    /// and can never write through it. Recomputed exactly when the
    /// consumer's state changes.
    #[must_use]
    pub fn computed<T, F>(&self, derive: F) -> Computed<T>
    where
        T: Clone + 'static,
        F: Fn(&Value) -> T + 'static,
    {
        let prefix = self.prefix.clone();
        Computed::new(self.cell.clone(), move |root| {
            let slice = get_or(root, &prefix, &Value::empty_map());
            derive(&slice)
        })
    }

    /// A memoized read-only accessor for the value at `path` relative to
    /// this namespace, substituting `fallback` when the location is missing
    /// or absent.
    #[must_use]
    pub fn reactive(&self, path: &Path, fallback: Value) -> Computed<Value> {
        let full = self.prefix.concat(path);
        Computed::new(self.cell.clone(), move |root| get_or(root, &full, &fallback))
    }

    /// A read/write accessor for the value at `path` relative to this
    /// namespace.
    ///
    /// Reads are identical to [`reactive`](Namespace::reactive). A write
    /// replaces the one addressed slot, expressed as a transform of the
    /// *root* state: exactly one store update per write, no matter how
    /// deeply this namespace is nested.
    #[must_use]
    pub fn writable(&self, path: &Path, fallback: Value) -> Writable {
        Writable {
            read: self.reactive(path, fallback),
            full_path: self.prefix.concat(path),
            write_back: Rc::clone(&self.write_back),
        }
    }

    /// A child namespace scoped one level deeper.
    ///
    /// The child's prefix is `self.prefix` followed by `path`; its
    /// write-back handle is the same one this namespace holds.
    #[must_use]
    pub fn namespace(&self, path: &Path) -> Namespace {
        Self {
            cell: self.cell.clone(),
            prefix: self.prefix.concat(path),
            write_back: Rc::clone(&self.write_back),
        }
    }
}

/// A memoized read/write accessor bound to one root-relative location.
#[derive(Clone)]
pub struct Writable {
    read: Computed<Value>,
    full_path: Path,
    write_back: WriteBack,
}

impl Writable {
    /// Reads the current value, memoized like any reactive accessor.
    #[must_use]
    pub fn get(&self) -> Value {
        self.read.get()
    }

    /// Replaces the addressed slot with `value` through a single atomic
    /// store update. Subscribers are notified synchronously before this
    /// call returns.
    pub fn set(&self, value: impl Into<Value>) {
        (self.write_back)(&self.full_path, value.into());
    }
}
