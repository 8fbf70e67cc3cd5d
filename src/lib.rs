//! Substate - path-addressed shared state with composable reactive
//! namespaces
//!
//! This crate re-exports all layers of the Substate system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: substate_scope      — Namespaces, accessors, config, entry point
//! Layer 1: substate_store      — Observable store, multicast broadcaster
//! Layer 0: substate_foundation — Value, Path, path engine, errors
//! ```

pub use substate_foundation as foundation;
pub use substate_scope as scope;
pub use substate_store as store;
