//! Core values, paths, and the path accessor engine for Substate.
//!
//! This crate provides:
//! - [`Value`] - The JSON-like state value type
//! - [`Path`] / [`Key`] - Immutable structural paths into nested state
//! - [`get_at`] / [`get_or`] / [`set_at`] - The pure path accessor engine
//! - [`Error`] - Categorized error types
//! - Persistent collections ([`SVec`], [`SMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod path;
pub mod paths;
pub mod value;

pub use collections::{SMap, SVec};
pub use error::{ConfigFieldError, Error, ErrorKind, FieldReason, Result};
pub use path::{Key, Path};
pub use paths::{get_at, get_or, set_at};
pub use value::{Kind, Value};
