//! # Error Types — Format Check Failures
//!
//! Defines the error types raised by format checkers and by the checker
//! registry. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Check failures carry the full offending descriptor so the external
//!   framework can surface it verbatim to whoever is validating the schema.
//! - Registry errors are kept separate from check failures: a lookup
//!   problem is a caller bug, a check failure is a schema bug.

use serde_json::Value;
use thiserror::Error;

/// Error raised by a format checker when a format list violates its rule.
#[derive(Error, Debug)]
pub enum FormatError {
    /// A variable-length (size 0) format appeared before the end of the
    /// format list. Nothing may follow a variable-length format, since its
    /// extent is only known at parse time.
    #[error(
        "variable-length (size 0) format must be the last format specified but is not: fmt: {fmt}"
    )]
    MisplacedVarlenFormat {
        /// Index of the offending descriptor in the format list.
        index: usize,
        /// Full content of the offending descriptor.
        fmt: Value,
    },

    /// The format list declares more formats than the schema parser accepts.
    #[error("format list has {count} entries, exceeding the maximum of {max}")]
    TooManyFormats {
        /// Number of descriptors in the rejected list.
        count: usize,
        /// Maximum number of descriptors permitted per list.
        max: usize,
    },
}

/// Error from the checker registry layer.
#[derive(Error, Debug)]
pub enum CheckerError {
    /// No checker is registered under the requested name.
    #[error("no format checker registered under '{0}'")]
    Unknown(String),

    /// A checker with this name is already registered.
    #[error("format checker '{0}' is already registered")]
    Duplicate(String),

    /// A checker ran and rejected the format list.
    #[error(transparent)]
    Format(#[from] FormatError),
}
