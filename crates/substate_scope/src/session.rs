//! The consumer entry point: wiring store, config, and namespaces together.
//!
//! A [`SharedState`] bundles the injected collaborators — the store, the
//! config registry, and the optional lifecycle hook. Each
//! [`use_state`](SharedState::use_state) call produces an independent
//! [`StateHandle`]: its own subscription and local state mirror, all
//! resolving against the same single store value.

use std::rc::Rc;

use substate_foundation::{Path, Result, Value, set_at};
use substate_store::{Store, Subscription};

use crate::cell::{Computed, StateCell};
use crate::config::ConfigRegistry;
use crate::hook::CleanupHook;
use crate::namespace::{Namespace, Writable, WriteBack};

/// The shared environment consumers attach to.
///
/// Constructed explicitly and injected; tests build isolated instances
/// instead of resetting process-wide globals.
pub struct SharedState {
    store: Store,
    config: ConfigRegistry,
    hook: CleanupHook,
}

impl SharedState {
    /// Creates an environment with an empty-map store, default config, and
    /// no lifecycle hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Store::default(),
            config: ConfigRegistry::new(),
            hook: CleanupHook::Unavailable,
        }
    }

    /// Replaces the store.
    #[must_use]
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = store;
        self
    }

    /// Installs the host lifecycle hook.
    #[must_use]
    pub fn with_hook(mut self, hook: CleanupHook) -> Self {
        self.hook = hook;
        self
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The process-wide configuration registry.
    #[must_use]
    pub fn config(&self) -> &ConfigRegistry {
        &self.config
    }

    /// Attaches a consumer with the registry's current configuration.
    ///
    /// # Errors
    ///
    /// Never fails for an empty override set; present for signature
    /// symmetry with [`use_state_with`](SharedState::use_state_with).
    pub fn use_state(&self) -> Result<StateHandle> {
        self.use_state_with(&Value::empty_map())
    }

    /// Attaches a consumer, merging `overrides` over the registry's
    /// current configuration.
    ///
    /// The handle gets its own subscription and its own local state
    /// mirror, seeded with the store's current value and kept current by
    /// the subscription's listener. In automatic cleanup mode the
    /// subscription's cancel is handed to the lifecycle hook; in manual
    /// mode — or when the hook is absent — the handle retains it and
    /// exposes [`unsubscribe`](StateHandle::unsubscribe).
    ///
    /// # Errors
    ///
    /// Propagates every configuration validation failure, aggregated.
    pub fn use_state_with(&self, overrides: &Value) -> Result<StateHandle> {
        let config = self.config.resolve(overrides)?;

        let cell = StateCell::new(self.store.get());
        let mirror = cell.clone();
        let subscription = self.store.subscribe(move |next| mirror.set(next.clone()));

        let store = self.store.clone();
        let write_back: WriteBack = Rc::new(move |path: &Path, value: Value| {
            store.update(|root| set_at(root, path, value));
        });
        let root = Namespace::new(cell, Path::root(), write_back);

        let retained = if config.manual_unsub {
            Some(subscription)
        } else if self.hook.is_available() {
            self.hook.register(move || subscription.cancel());
            None
        } else {
            // no lifecycle signal to lean on; keep release explicit
            Some(subscription)
        };

        Ok(StateHandle { root, retained })
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// One consumer's attachment: the root namespace bundle plus cleanup.
pub struct StateHandle {
    root: Namespace,
    retained: Option<Subscription>,
}

impl std::fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHandle").finish_non_exhaustive()
    }
}

impl StateHandle {
    /// The root namespace bundle.
    #[must_use]
    pub fn root(&self) -> &Namespace {
        &self.root
    }

    /// Memoized view of the whole state. See [`Namespace::state`].
    #[must_use]
    pub fn state(&self) -> Computed<Value> {
        self.root.state()
    }

    /// Memoized derivation over the whole state. See
    /// [`Namespace::computed`].
    #[must_use]
    pub fn computed<T, F>(&self, derive: F) -> Computed<T>
    where
        T: Clone + 'static,
        F: Fn(&Value) -> T + 'static,
    {
        self.root.computed(derive)
    }

    /// Memoized read-only accessor by root-relative path. See
    /// [`Namespace::reactive`].
    #[must_use]
    pub fn reactive(&self, path: &Path, fallback: Value) -> Computed<Value> {
        self.root.reactive(path, fallback)
    }

    /// Read/write accessor by root-relative path. See
    /// [`Namespace::writable`].
    #[must_use]
    pub fn writable(&self, path: &Path, fallback: Value) -> Writable {
        self.root.writable(path, fallback)
    }

    /// Child namespace scoped to `path`. See [`Namespace::namespace`].
    #[must_use]
    pub fn namespace(&self, path: &Path) -> Namespace {
        self.root.namespace(path)
    }

    /// Returns true when this handle retains its subscription and
    /// [`unsubscribe`](StateHandle::unsubscribe) is the release path.
    #[must_use]
    pub fn manual_cleanup(&self) -> bool {
        self.retained.is_some()
    }

    /// Cancels the retained subscription.
    ///
    /// Safe to call any number of times. A no-op when cleanup was handed
    /// to the lifecycle hook.
    pub fn unsubscribe(&self) {
        if let Some(subscription) = &self.retained {
            subscription.cancel();
        }
    }
}
