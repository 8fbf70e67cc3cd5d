//! Namespaces, accessors, configuration, and the consumer entry point for
//! Substate.
//!
//! This crate provides:
//! - [`SharedState`] / [`StateHandle`] - The consumer entry point
//! - [`Namespace`] / [`Writable`] - Path-scoped accessor bundles
//! - [`Computed`] / [`StateCell`] - Memoized derivation over a local mirror
//! - [`ConfigRegistry`] / [`ConfigSchema`] - Validated configuration
//! - [`CleanupHook`] - The optional host lifecycle capability

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod config;
pub mod hook;
pub mod namespace;
pub mod session;

pub use cell::{Computed, StateCell};
pub use config::{Config, ConfigRegistry, ConfigSchema, MANUAL_UNSUB, OptionSchema};
pub use hook::{CleanupCallback, CleanupHook};
pub use namespace::{Namespace, Writable};
pub use session::{SharedState, StateHandle};
