//! # fmtcheck — Format Checkers for Driver Data Schemas
//!
//! Named, stateless validation rules over driver format lists, invoked by
//! an external schema-validation framework during its format-checking pass.
//!
//! A driver schema declares, per data descriptor, an ordered list of format
//! records (`name`, `unit`, `type`, and an optional byte `size`). The order
//! determines parse precedence: fixed-size formats are consumed front to
//! back, and a `size` of 0 marks a variable-length format whose extent is
//! only known at parse time.
//!
//! ## Checkers
//!
//! - [`VarlenFmtChecker`] (`"varlen-fmt"`) — a variable-length format must
//!   be the last format specified, or consumers cannot tell one format
//!   from another.
//! - [`FmtCountChecker`] (`"fmt-count"`) — a format list may declare at
//!   most [`MAX_FMT_ENTRIES`] formats.
//!
//! ## Design
//!
//! Checkers are pure functions of the caller-supplied format list: no I/O,
//! no shared state, no panics. Failures are structured [`FormatError`]
//! values carrying the offending descriptor verbatim, so the framework can
//! surface them to whoever is validating the schema. The name → checker
//! association is an explicit [`FormatCheckerRegistry`] built at framework
//! initialization, not implicit global state.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checker;
pub mod error;
pub mod fmt_count;
pub mod varlen;

// Re-export primary types for ergonomic imports.
pub use checker::{FormatChecker, FormatCheckerRegistry};
pub use error::{CheckerError, FormatError};
pub use fmt_count::{FmtCountChecker, FMT_COUNT, MAX_FMT_ENTRIES};
pub use varlen::{VarlenFmtChecker, VARLEN_FMT};
