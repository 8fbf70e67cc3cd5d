//! Error types for the Substate system.
//!
//! Uses `thiserror` for ergonomic error definition. All errors here are
//! immediately-thrown programmer errors surfaced at the call site that
//! violated a contract; none are caught or retried internally.

use std::fmt;

use thiserror::Error;

use crate::value::Kind;

/// Convenience alias for results carrying a Substate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Substate operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an error for a configuration argument that was not a map.
    #[must_use]
    pub fn config_type(actual: Kind) -> Self {
        Self::new(ErrorKind::ConfigType { actual })
    }

    /// Creates an error aggregating every field-level configuration failure.
    #[must_use]
    pub fn invalid_config(errors: Vec<ConfigFieldError>) -> Self {
        Self::new(ErrorKind::InvalidConfig(errors))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The configuration argument was not a map.
    #[error("config must be of type \"map\", received \"{actual}\"")]
    ConfigType {
        /// The kind that was actually received.
        actual: Kind,
    },

    /// One or more configuration fields failed validation.
    ///
    /// Every failing field is reported, not just the first.
    #[error("invalid config: {}", join_field_errors(.0))]
    InvalidConfig(Vec<ConfigFieldError>),
}

/// A single field-level configuration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFieldError {
    /// The option name that failed.
    pub option: String,
    /// Why it failed.
    pub reason: FieldReason,
}

impl ConfigFieldError {
    /// Creates a failure for an option the schema does not recognize.
    #[must_use]
    pub fn unknown_option(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            reason: FieldReason::UnknownOption,
        }
    }

    /// Creates a failure for an option value of the wrong kind.
    #[must_use]
    pub fn wrong_kind(option: impl Into<String>, expected: Kind, actual: Kind) -> Self {
        Self {
            option: option.into(),
            reason: FieldReason::WrongKind { expected, actual },
        }
    }
}

impl fmt::Display for ConfigFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FieldReason::UnknownOption => write!(f, "unknown option \"{}\"", self.option),
            FieldReason::WrongKind { expected, actual } => write!(
                f,
                "\"{}\" expected \"{expected}\", received \"{actual}\"",
                self.option
            ),
        }
    }
}

/// Why a configuration field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldReason {
    /// The option name is not part of the schema.
    UnknownOption,
    /// The option value had the wrong kind.
    WrongKind {
        /// The kind the schema requires.
        expected: Kind,
        /// The kind that was actually received.
        actual: Kind,
    },
}

fn join_field_errors(errors: &[ConfigFieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
