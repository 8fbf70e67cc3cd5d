//! Observable state store and multicast broadcaster for Substate.
//!
//! This crate provides:
//! - [`Store`] - The single owner of the current state value
//! - [`Multicast`] - Replay-of-one multicast subject backing the store
//! - [`Subscription`] - Idempotent cancellation handle
//!
//! Everything here is single-threaded and cooperative: notifications are
//! delivered synchronously in subscription order inside the updater's call
//! stack, and there is no suspension point anywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod multicast;
pub mod store;

pub use multicast::{Multicast, Subscription};
pub use store::Store;
