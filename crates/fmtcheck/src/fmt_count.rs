//! # Format Count Check
//!
//! The schema parser sizes its per-descriptor format tables for a bounded
//! number of entries. This checker rejects format lists that would
//! overflow that bound before the parser ever sees them.

use serde_json::Value;

use crate::checker::FormatChecker;
use crate::error::FormatError;

/// Registration name for the format count check.
pub const FMT_COUNT: &str = "fmt-count";

/// Maximum number of formats one descriptor may declare.
pub const MAX_FMT_ENTRIES: usize = 100;

/// Checker enforcing the [`MAX_FMT_ENTRIES`] cap on format lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct FmtCountChecker;

impl FormatChecker for FmtCountChecker {
    fn name(&self) -> &'static str {
        FMT_COUNT
    }

    fn check(&self, fmt_list: &[Value]) -> Result<(), FormatError> {
        if fmt_list.len() > MAX_FMT_ENTRIES {
            return Err(FormatError::TooManyFormats {
                count: fmt_list.len(),
                max: MAX_FMT_ENTRIES,
            });
        }

        Ok(())
    }
}
