//! The host lifecycle hook: an optional cleanup-registration capability.
//!
//! When the hosting environment can signal "this consumer is gone", it is
//! modeled as an explicit capability resolved once and passed in, not
//! probed at call time. Absence is an ordinary state, never an error: the
//! entry point falls back to exposing explicit release instead.

use std::fmt;
use std::rc::Rc;

/// A cleanup action handed to the host's lifecycle registrar.
pub type CleanupCallback = Box<dyn FnOnce()>;

/// The optional lifecycle capability of the hosting environment.
#[derive(Clone)]
pub enum CleanupHook {
    /// The host can run callbacks when the consumer's lifecycle ends.
    Available(Rc<dyn Fn(CleanupCallback)>),
    /// No lifecycle signal exists; cleanup must be explicit.
    Unavailable,
}

impl CleanupHook {
    /// Wraps a host registrar as an available hook.
    #[must_use]
    pub fn available(registrar: impl Fn(CleanupCallback) + 'static) -> Self {
        Self::Available(Rc::new(registrar))
    }

    /// Returns true when a lifecycle registrar is present.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Hands `callback` to the host registrar.
    ///
    /// Returns `false` (without invoking anything) when the hook is
    /// unavailable, so callers can fall back to explicit cleanup.
    pub fn register(&self, callback: impl FnOnce() + 'static) -> bool {
        match self {
            Self::Available(registrar) => {
                registrar(Box::new(callback));
                true
            }
            Self::Unavailable => false,
        }
    }
}

impl fmt::Debug for CleanupHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(_) => write!(f, "CleanupHook::Available"),
            Self::Unavailable => write!(f, "CleanupHook::Unavailable"),
        }
    }
}
